use tracing::{debug, info};

use crate::errors::{AcademicError, Result};
use crate::models::evaluations::entities::Scores;
use crate::services::AcademicRecords;

pub fn record_grades(
    records: &mut AcademicRecords,
    class_code: &str,
    student_id: &str,
    scores: Scores,
) -> Result<bool> {
    let student = records
        .students
        .get(student_id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {student_id} not found")))?;
    let class = records
        .catalog
        .get_class_mut(class_code)
        .ok_or_else(|| AcademicError::not_found(format!("Class {class_code} not found")))?;

    let recorded = class.record_grades(student, scores)?;
    if recorded {
        info!("Recorded grades of {} in class {}", student_id, class_code);
    } else {
        debug!("Special student {} does not receive grades", student_id);
    }
    Ok(recorded)
}

pub fn record_attendance(
    records: &mut AcademicRecords,
    class_code: &str,
    student_id: &str,
    classes_held: i64,
    classes_attended: i64,
) -> Result<bool> {
    let student = records
        .students
        .get(student_id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {student_id} not found")))?;
    let class = records
        .catalog
        .get_class_mut(class_code)
        .ok_or_else(|| AcademicError::not_found(format!("Class {class_code} not found")))?;

    let recorded = class.record_attendance(student, classes_held, classes_attended)?;
    info!(
        "Recorded attendance of {} in class {}: {}/{}",
        student_id, class_code, classes_attended, classes_held
    );
    Ok(recorded)
}
