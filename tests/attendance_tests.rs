mod common;

use common::test_app;
use chrono::NaiveDate;
use tabelbot::core::attendance::{
    mark_arrived_at, mark_departed_at, presence, MarkError, Presence,
};
use tabelbot::models::Action;

fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn default_state_is_out() {
    let (_dir, app) = test_app();
    assert_eq!(presence(&app.store, 1), Presence::Out);
}

#[test]
fn arrival_and_departure_alternate() {
    let (_dir, app) = test_app();

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    assert_eq!(presence(&app.store, 1), Presence::In);

    mark_departed_at(&app.store, 1, "Иванов И.И.", "🛒 Магазин", at(1, 18)).unwrap();
    assert_eq!(presence(&app.store, 1), Presence::Out);

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 20)).unwrap();
    assert_eq!(presence(&app.store, 1), Presence::In);

    // no two consecutive events for one person share an action
    let events = app.store.events.all();
    assert_eq!(events.len(), 3);
    for pair in events.windows(2) {
        assert_ne!(pair[0].action, pair[1].action);
    }
}

#[test]
fn double_arrival_writes_nothing() {
    let (_dir, app) = test_app();

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    let err = mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 9)).unwrap_err();
    assert_eq!(err, MarkError::AlreadyIn);

    assert_eq!(app.store.events.all().len(), 1);
    assert_eq!(presence(&app.store, 1), Presence::In);
}

#[test]
fn departure_from_out_writes_nothing() {
    let (_dir, app) = test_app();

    let err = mark_departed_at(&app.store, 1, "Иванов И.И.", "🏛 МФЦ", at(1, 8)).unwrap_err();
    assert_eq!(err, MarkError::AlreadyOut);
    assert!(app.store.events.all().is_empty());
}

#[test]
fn states_are_tracked_per_person() {
    let (_dir, app) = test_app();

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    mark_arrived_at(&app.store, 2, "Петров П.П.", at(1, 9)).unwrap();
    mark_departed_at(&app.store, 1, "Иванов И.И.", "🚓 Патруль", at(1, 10)).unwrap();

    assert_eq!(presence(&app.store, 1), Presence::Out);
    assert_eq!(presence(&app.store, 2), Presence::In);
}

#[test]
fn arrival_stores_placeholder_location() {
    let (_dir, app) = test_app();

    let event = mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    assert_eq!(event.action, Action::Arrived);
    assert_eq!(event.location, "-");
}

#[test]
fn event_name_is_a_snapshot() {
    let (_dir, app) = test_app();

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    app.store.people.save_name(1, "Сидоров С.С.", 1);

    assert_eq!(app.store.events.all()[0].name, "Иванов И.И.");
}

#[test]
fn journal_returns_last_three_oldest_first() {
    let (_dir, app) = test_app();

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    mark_departed_at(&app.store, 1, "Иванов И.И.", "🛒 Магазин", at(1, 18)).unwrap();
    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(2, 8)).unwrap();
    mark_departed_at(&app.store, 1, "Иванов И.И.", "🏛 МФЦ", at(2, 18)).unwrap();

    let recent = app.store.events.recent_for(1, 3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].timestamp, at(1, 18));
    assert_eq!(recent[2].timestamp, at(2, 18));
}

#[test]
fn clear_wipes_the_log() {
    let (_dir, app) = test_app();

    mark_arrived_at(&app.store, 1, "Иванов И.И.", at(1, 8)).unwrap();
    app.store.events.clear();
    assert!(app.store.events.all().is_empty());
    assert_eq!(presence(&app.store, 1), Presence::Out);
}
