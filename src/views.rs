//! View assembly: collection listings with references resolved for display.
//!
//! These are the flat structures the presentation layer consumes: ids
//! pre-formatted to strings, names substituted in place of references. One
//! lookup per reference per record; listing N classes costs N teacher
//! lookups even when they share a teacher.

use crate::error::AppError;
use crate::ident::RecordId;
use crate::resolve::{resolve_many, resolve_one, NOT_ASSIGNED, UNKNOWN};
use crate::store::Collections;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentView {
    pub id: String,
    pub name: String,
    pub class_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassView {
    pub id: String,
    pub name: String,
    pub teacher_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherView {
    pub id: String,
    pub name: String,
    pub classes: Vec<ClassSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleView {
    pub id: String,
    pub class_name: String,
    pub teacher_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

/// One slot on a teacher's timetable: the teacher is fixed by the query, so
/// only the class name needs resolving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherScheduleEntry {
    pub id: String,
    pub class_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherSchedulePage {
    pub teacher_name: String,
    pub schedules: Vec<TeacherScheduleEntry>,
}

/// Mirror of [`TeacherScheduleEntry`] for the class-side listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassScheduleEntry {
    pub id: String,
    pub teacher_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSchedulePage {
    pub class_name: String,
    pub schedules: Vec<ClassScheduleEntry>,
}

/// Students with their enrolled class names. Dangling enrollments drop out
/// of `class_names` without a placeholder.
pub async fn students(db: &Collections) -> Result<Vec<StudentView>, AppError> {
    let mut out = Vec::new();
    for student in db.students.find_all().await? {
        let class_names =
            resolve_many(&db.classes, &student.doc.class_ids, |c| c.name.clone()).await?;
        out.push(StudentView {
            id: student.id.to_string(),
            name: student.doc.name,
            class_names,
        });
    }
    Ok(out)
}

/// Classes with their teacher's name: "Not Assigned" when no teacher is set,
/// "Unknown" when the reference dangles.
pub async fn classes(db: &Collections) -> Result<Vec<ClassView>, AppError> {
    let mut out = Vec::new();
    for class in db.classes.find_all().await? {
        let teacher_name = resolve_one(
            &db.teachers,
            class.doc.teacher_id.as_ref(),
            NOT_ASSIGNED,
            |t| t.name.clone(),
        )
        .await?;
        out.push(ClassView {
            id: class.id.to_string(),
            name: class.doc.name,
            teacher_name,
        });
    }
    Ok(out)
}

/// Teachers with the classes they teach (derived backlink, computed by
/// filtering the class collection at read time).
pub async fn teachers(db: &Collections) -> Result<Vec<TeacherView>, AppError> {
    let mut out = Vec::new();
    for teacher in db.teachers.find_all().await? {
        let classes = db
            .classes
            .find_by_field("teacher_id", &teacher.id.to_string())
            .await?
            .into_iter()
            .map(|c| ClassSummary {
                id: c.id.to_string(),
                name: c.doc.name,
            })
            .collect();
        out.push(TeacherView {
            id: teacher.id.to_string(),
            name: teacher.doc.name,
            classes,
        });
    }
    Ok(out)
}

/// Every schedule slot with both references resolved.
pub async fn schedules(db: &Collections) -> Result<Vec<ScheduleView>, AppError> {
    let mut out = Vec::new();
    for slot in db.schedules.find_all().await? {
        let class_name =
            resolve_one(&db.classes, Some(&slot.doc.class_id), UNKNOWN, |c| {
                c.name.clone()
            })
            .await?;
        let teacher_name =
            resolve_one(&db.teachers, Some(&slot.doc.teacher_id), UNKNOWN, |t| {
                t.name.clone()
            })
            .await?;
        out.push(ScheduleView {
            id: slot.id.to_string(),
            class_name,
            teacher_name,
            day_of_week: slot.doc.day_of_week,
            start_time: slot.doc.start_time,
            end_time: slot.doc.end_time,
        });
    }
    Ok(out)
}

/// One teacher's slots, each with its class name resolved. Works for a
/// teacher id with no schedules (empty list) and for an unknown teacher id
/// (the heading resolves to "Unknown").
pub async fn teacher_schedules(
    db: &Collections,
    teacher_id: &RecordId,
) -> Result<TeacherSchedulePage, AppError> {
    let slots = db
        .schedules
        .find_by_field("teacher_id", &teacher_id.to_string())
        .await?;
    let mut schedules = Vec::with_capacity(slots.len());
    for slot in slots {
        let class_name =
            resolve_one(&db.classes, Some(&slot.doc.class_id), UNKNOWN, |c| {
                c.name.clone()
            })
            .await?;
        schedules.push(TeacherScheduleEntry {
            id: slot.id.to_string(),
            class_name,
            day_of_week: slot.doc.day_of_week,
            start_time: slot.doc.start_time,
            end_time: slot.doc.end_time,
        });
    }
    let teacher_name =
        resolve_one(&db.teachers, Some(teacher_id), UNKNOWN, |t| t.name.clone()).await?;
    Ok(TeacherSchedulePage {
        teacher_name,
        schedules,
    })
}

/// One class's slots, each with its teacher name resolved.
pub async fn class_schedules(
    db: &Collections,
    class_id: &RecordId,
) -> Result<ClassSchedulePage, AppError> {
    let slots = db
        .schedules
        .find_by_field("class_id", &class_id.to_string())
        .await?;
    let mut schedules = Vec::with_capacity(slots.len());
    for slot in slots {
        let teacher_name =
            resolve_one(&db.teachers, Some(&slot.doc.teacher_id), UNKNOWN, |t| {
                t.name.clone()
            })
            .await?;
        schedules.push(ClassScheduleEntry {
            id: slot.id.to_string(),
            teacher_name,
            day_of_week: slot.doc.day_of_week,
            start_time: slot.doc.start_time,
            end_time: slot.doc.end_time,
        });
    }
    let class_name =
        resolve_one(&db.classes, Some(class_id), UNKNOWN, |c| c.name.clone()).await?;
    Ok(ClassSchedulePage {
        class_name,
        schedules,
    })
}
