use tracing::info;

use super::StudentService;
use crate::errors::{AcademicError, Result};
use crate::models::students::entities::Student;
use crate::models::students::requests::UpdateStudentRequest;
use crate::utils::{require, validate_text_field};

pub fn update_student<'a>(
    service: &'a mut StudentService,
    id: &str,
    update: UpdateStudentRequest,
) -> Result<&'a Student> {
    if let Some(name) = &update.name {
        require("Name", validate_text_field(name))?;
    }
    if let Some(course) = &update.course_of_study {
        require("Course of study", validate_text_field(course))?;
    }

    let student = service
        .students
        .get_mut(id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {id} not found")))?;

    if let Some(name) = update.name {
        student.set_name(name.trim());
    }
    if let Some(course) = update.course_of_study {
        student.course_of_study = course.trim().to_string();
    }
    info!("Updated student {}", id);

    Ok(student)
}
