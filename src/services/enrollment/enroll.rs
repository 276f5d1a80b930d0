use tracing::{debug, info};

use crate::errors::{AcademicError, Result};
use crate::models::students::entities::{SPECIAL_STUDENT_MAX_COURSES, StudentKind};
use crate::services::AcademicRecords;

pub fn enroll(
    records: &mut AcademicRecords,
    student_id: &str,
    course_code: &str,
    class_code: &str,
) -> Result<()> {
    let course = records
        .catalog
        .get_course(course_code)
        .ok_or_else(|| AcademicError::not_found(format!("Course {course_code} not found")))?;
    let class = records
        .catalog
        .get_class(class_code)
        .ok_or_else(|| AcademicError::not_found(format!("Class {class_code} not found")))?;
    if class.course_code() != course_code {
        return Err(AcademicError::validation(format!(
            "Class {class_code} does not belong to course {course_code}"
        )));
    }
    let class_full = class.is_full();

    let student = records
        .students
        .get_mut(student_id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {student_id} not found")))?;

    if student.is_semester_locked() {
        debug!("Student {} tried to enroll with a locked semester", student_id);
        return Err(AcademicError::not_eligible(format!(
            "Semester is locked for student {student_id}"
        )));
    }
    if student.is_enrolled_in(course_code) {
        return Err(AcademicError::conflict(format!(
            "Student {student_id} is already enrolled in course {course_code}"
        )));
    }
    if class_full {
        return Err(AcademicError::conflict(format!(
            "Class {class_code} is full"
        )));
    }
    if !student.enroll(course) {
        debug!("Student {} is not eligible for {}", student_id, course_code);
        let reason = match student.kind() {
            StudentKind::Standard => format!("Prerequisites of course {course_code} are not met"),
            StudentKind::Special => format!(
                "Special students may enroll in at most {SPECIAL_STUDENT_MAX_COURSES} courses"
            ),
        };
        return Err(AcademicError::not_eligible(reason));
    }

    let Some(class) = records.catalog.get_class_mut(class_code) else {
        student.withdraw(course_code);
        return Err(AcademicError::not_found(format!("Class {class_code} not found")));
    };
    if !class.enroll_student(student) {
        // 教学班拒绝时撤销学生侧的选课
        student.withdraw(course_code);
        return Err(AcademicError::conflict(format!(
            "Student {student_id} cannot join class {class_code}"
        )));
    }

    info!(
        "Enrolled student {} in course {} (class {})",
        student_id, course_code, class_code
    );
    Ok(())
}

pub fn withdraw_course(
    records: &mut AcademicRecords,
    student_id: &str,
    course_code: &str,
) -> Result<()> {
    let student = records
        .students
        .get_mut(student_id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {student_id} not found")))?;

    if !student.withdraw(course_code) {
        return Err(AcademicError::not_found(format!(
            "Student {student_id} is not enrolled in course {course_code}"
        )));
    }

    for class in records.catalog.classes_mut() {
        if class.course_code() == course_code {
            class.withdraw_student(student_id);
        }
    }

    info!("Student {} withdrew from course {}", student_id, course_code);
    Ok(())
}
