mod common;

use common::{register, test_app};
use chrono::NaiveDate;
use tabelbot::core::attendance::{mark_arrived_at, mark_departed_at};
use tabelbot::core::summary;

fn at(hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn partition_by_current_state() {
    let (_dir, app) = test_app();
    register(&app, 1, "Борисов Б.Б.");
    register(&app, 2, "Антонов А.А.");
    register(&app, 3, "Власов В.В.");

    mark_arrived_at(&app.store, 1, "Борисов Б.Б.", at(8)).unwrap();
    mark_arrived_at(&app.store, 2, "Антонов А.А.", at(8)).unwrap();
    mark_departed_at(&app.store, 2, "Антонов А.А.", "🏥 Поликлиника", at(10)).unwrap();
    // person 3 has no events at all

    let s = summary::build(&app.store);
    assert_eq!(s.present, vec!["Борисов Б.Б.".to_string()]);
    assert_eq!(
        s.absent,
        vec![
            ("Антонов А.А.".to_string(), "Поликлиника".to_string()),
            ("Власов В.В.".to_string(), "-".to_string()),
        ]
    );
}

#[test]
fn lists_are_alphabetical() {
    let (_dir, app) = test_app();
    register(&app, 1, "Власов В.В.");
    register(&app, 2, "Антонов А.А.");
    register(&app, 3, "Борисов Б.Б.");
    for (id, name) in [(1, "Власов В.В."), (2, "Антонов А.А."), (3, "Борисов Б.Б.")] {
        mark_arrived_at(&app.store, id, name, at(8)).unwrap();
    }

    let s = summary::build(&app.store);
    assert_eq!(
        s.present,
        vec![
            "Антонов А.А.".to_string(),
            "Борисов Б.Б.".to_string(),
            "Власов В.В.".to_string(),
        ]
    );
}

#[test]
fn render_shows_counted_labeled_lists() {
    let (_dir, app) = test_app();
    register(&app, 1, "Борисов Б.Б.");
    register(&app, 2, "Антонов А.А.");

    mark_arrived_at(&app.store, 1, "Борисов Б.Б.", at(8)).unwrap();
    mark_arrived_at(&app.store, 2, "Антонов А.А.", at(8)).unwrap();
    mark_departed_at(&app.store, 2, "Антонов А.А.", "🛒 Магазин", at(12)).unwrap();

    let text = summary::render(&summary::build(&app.store));
    assert!(text.contains("👥 В части (1):"));
    assert!(text.contains("— Борисов Б.Б."));
    assert!(text.contains("🚶 Вне части (1):"));
    assert!(text.contains("— Антонов А.А. (Магазин)"));
}

#[test]
fn empty_unit_renders_zero_count() {
    let (_dir, app) = test_app();
    let text = summary::render(&summary::build(&app.store));
    assert!(text.contains("👥 В части (0):"));
    assert!(!text.contains("Вне части"));
}
