//! View assembly: listing shapes with references resolved, backlinks, and
//! the filtered schedule pages.


use roster_api::model::{Class, Schedule, Student, Teacher};
use roster_api::store::Collections;
use roster_api::views;
use roster_api::RecordId;
use test_support::collections;

async fn seed_teacher(db: &Collections, name: &str) -> RecordId {
    db.teachers
        .insert(&Teacher { name: name.into() })
        .await
        .unwrap()
}

async fn seed_class(db: &Collections, name: &str, teacher_id: Option<RecordId>) -> RecordId {
    db.classes
        .insert(&Class {
            name: name.into(),
            teacher_id,
            schedule: None,
        })
        .await
        .unwrap()
}

async fn seed_slot(
    db: &Collections,
    class_id: RecordId,
    teacher_id: RecordId,
    day: &str,
) -> RecordId {
    db.schedules
        .insert(&Schedule {
            class_id,
            teacher_id,
            day_of_week: day.into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn students_view_resolves_class_names_and_drops_dangling() {
    let db = collections().await;
    let algebra = seed_class(&db, "Algebra", None).await;
    let dangling = RecordId::new();
    db.students
        .insert(&Student {
            name: "Ana".into(),
            class_ids: vec![algebra, dangling],
        })
        .await
        .unwrap();

    let listing = views::students(&db).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "Ana");
    assert_eq!(listing[0].class_names, vec!["Algebra".to_string()]);
}

#[tokio::test]
async fn classes_view_covers_assigned_unassigned_and_dangling() {
    let db = collections().await;
    let lee = seed_teacher(&db, "Ms. Lee").await;
    seed_class(&db, "Algebra", Some(lee)).await;
    seed_class(&db, "Biology", None).await;
    seed_class(&db, "Chemistry", Some(RecordId::new())).await;

    let listing = views::classes(&db).await.unwrap();
    let by_name: Vec<(&str, &str)> = listing
        .iter()
        .map(|c| (c.name.as_str(), c.teacher_name.as_str()))
        .collect();
    assert_eq!(
        by_name,
        vec![
            ("Algebra", "Ms. Lee"),
            ("Biology", "Not Assigned"),
            ("Chemistry", "Unknown"),
        ]
    );
}

#[tokio::test]
async fn teachers_view_backlinks_taught_classes() {
    let db = collections().await;
    let lee = seed_teacher(&db, "Ms. Lee").await;
    let okafor = seed_teacher(&db, "Mr. Okafor").await;
    seed_class(&db, "Algebra", Some(lee)).await;
    seed_class(&db, "Geometry", Some(lee)).await;

    let listing = views::teachers(&db).await.unwrap();
    assert_eq!(listing.len(), 2);

    let lee_view = listing.iter().find(|t| t.id == lee.to_string()).unwrap();
    let names: Vec<&str> = lee_view.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Algebra", "Geometry"]);

    let okafor_view = listing
        .iter()
        .find(|t| t.id == okafor.to_string())
        .unwrap();
    assert!(okafor_view.classes.is_empty());
}

#[tokio::test]
async fn schedules_view_resolves_both_names() {
    let db = collections().await;
    let lee = seed_teacher(&db, "Ms. Lee").await;
    let algebra = seed_class(&db, "Algebra", Some(lee)).await;
    seed_slot(&db, algebra, lee, "Monday").await;

    let listing = views::schedules(&db).await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].class_name, "Algebra");
    assert_eq!(listing[0].teacher_name, "Ms. Lee");
    assert_eq!(listing[0].day_of_week, "Monday");
}

#[tokio::test]
async fn schedules_view_renders_dangling_references_as_unknown() {
    let db = collections().await;
    seed_slot(&db, RecordId::new(), RecordId::new(), "Friday").await;

    let listing = views::schedules(&db).await.unwrap();
    assert_eq!(listing[0].class_name, "Unknown");
    assert_eq!(listing[0].teacher_name, "Unknown");
}

#[tokio::test]
async fn teacher_schedules_filters_to_the_selected_teacher() {
    let db = collections().await;
    let lee = seed_teacher(&db, "Ms. Lee").await;
    let other = seed_teacher(&db, "Mr. Okafor").await;
    let algebra = seed_class(&db, "Algebra", Some(lee)).await;
    let physics = seed_class(&db, "Physics", Some(other)).await;
    seed_slot(&db, algebra, lee, "Monday").await;
    seed_slot(&db, algebra, lee, "Thursday").await;
    seed_slot(&db, physics, other, "Friday").await;

    let page = views::teacher_schedules(&db, &lee).await.unwrap();
    assert_eq!(page.teacher_name, "Ms. Lee");
    assert_eq!(page.schedules.len(), 2);
    assert!(page.schedules.iter().all(|s| s.class_name == "Algebra"));
}

#[tokio::test]
async fn teacher_schedules_with_no_slots_is_an_empty_page() {
    let db = collections().await;
    let lee = seed_teacher(&db, "Ms. Lee").await;

    let page = views::teacher_schedules(&db, &lee).await.unwrap();
    assert_eq!(page.teacher_name, "Ms. Lee");
    assert!(page.schedules.is_empty());
}

#[tokio::test]
async fn teacher_schedules_for_unknown_teacher_degrades_not_fails() {
    let db = collections().await;
    let page = views::teacher_schedules(&db, &RecordId::new()).await.unwrap();
    assert_eq!(page.teacher_name, "Unknown");
    assert!(page.schedules.is_empty());
}

#[tokio::test]
async fn class_schedules_filters_and_resolves_teacher_names() {
    let db = collections().await;
    let lee = seed_teacher(&db, "Ms. Lee").await;
    let algebra = seed_class(&db, "Algebra", Some(lee)).await;
    seed_slot(&db, algebra, lee, "Monday").await;
    seed_slot(&db, RecordId::new(), lee, "Tuesday").await;

    let page = views::class_schedules(&db, &algebra).await.unwrap();
    assert_eq!(page.class_name, "Algebra");
    assert_eq!(page.schedules.len(), 1);
    assert_eq!(page.schedules[0].teacher_name, "Ms. Lee");
}
