mod common;

use common::{register, test_app};

#[test]
fn missing_files_read_as_empty_tables() {
    let (_dir, app) = test_app();
    assert!(app.store.people.all_sorted().is_empty());
    assert!(app.store.admins.all().is_empty());
    assert!(app.store.events.all().is_empty());
}

#[test]
fn save_name_updates_in_place() {
    let (_dir, app) = test_app();
    register(&app, 1, "иванов И.И.");
    register(&app, 1, "Сидоров С.С.");

    let people = app.store.people.all_sorted();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "Сидоров С.С.");
}

#[test]
fn names_are_capitalized_and_sorted() {
    let (_dir, app) = test_app();
    register(&app, 1, "власов В.В.");
    register(&app, 2, "антонов А.А.");

    let people = app.store.people.all_sorted();
    assert_eq!(people[0].name, "Антонов А.А.");
    assert_eq!(people[1].name, "Власов В.В.");
}

#[test]
fn renaming_keeps_the_chat_handle() {
    let (_dir, app) = test_app();
    app.store.people.save_name(1, "Иванов И.И.", 555);
    app.store.people.save_name(1, "Сидоров С.С.", 777);

    // the chat handle recorded at registration survives renames
    assert_eq!(app.store.people.get(1).unwrap().chat_id, 555);
}

#[test]
fn malformed_event_rows_are_skipped() {
    let (dir, app) = test_app();
    std::fs::write(
        dir.path().join("attendance.csv"),
        "10.06.2025 08:00:00,1,Иванов И.И.,Прибыл,-\n\
         not-a-timestamp,2,Петров П.П.,Прибыл,-\n\
         10.06.2025 09:00:00,3,Сидоров С.С.,Неизвестно,-\n",
    )
    .unwrap();

    let events = app.store.events.all();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].person_id, 1);
}

#[test]
fn clearing_a_missing_log_is_a_no_op() {
    let (_dir, app) = test_app();
    app.store.events.clear();
    assert!(app.store.events.all().is_empty());
}
