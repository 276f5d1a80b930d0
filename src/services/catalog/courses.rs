use tracing::{debug, info};

use super::CatalogService;
use crate::errors::{AcademicError, Result};
use crate::models::courses::entities::Course;
use crate::models::courses::requests::CreateCourseRequest;
use crate::utils::{require, validate_identifier, validate_text_field};

pub fn register_course(service: &mut CatalogService, request: CreateCourseRequest) -> Result<()> {
    require("Course name", validate_text_field(&request.name))?;
    require("Course code", validate_identifier(&request.code))?;

    if service.courses.contains_key(&request.code) {
        debug!("Rejected duplicate course code {}", request.code);
        return Err(AcademicError::conflict(format!(
            "A course with code {} already exists",
            request.code
        )));
    }

    let course = Course::new(request.name.trim(), request.code.clone(), request.credit_hours);
    info!("Registered course {}", course);
    service.courses.insert(request.code, course);
    Ok(())
}

pub fn add_prerequisite(
    service: &mut CatalogService,
    course_code: &str,
    prerequisite_code: &str,
) -> Result<()> {
    if !service.courses.contains_key(prerequisite_code) {
        return Err(AcademicError::not_found(format!(
            "Prerequisite course {prerequisite_code} not found"
        )));
    }
    if course_code == prerequisite_code {
        return Err(AcademicError::validation(format!(
            "Course {course_code} cannot be its own prerequisite"
        )));
    }

    let course = service
        .courses
        .get_mut(course_code)
        .ok_or_else(|| AcademicError::not_found(format!("Course {course_code} not found")))?;

    // 重复添加视为无操作
    if course.add_prerequisite(prerequisite_code) {
        info!("Course {} now requires {}", course_code, prerequisite_code);
    }
    Ok(())
}

pub fn remove_prerequisite(
    service: &mut CatalogService,
    course_code: &str,
    prerequisite_code: &str,
) -> Result<bool> {
    let course = service
        .courses
        .get_mut(course_code)
        .ok_or_else(|| AcademicError::not_found(format!("Course {course_code} not found")))?;
    Ok(course.remove_prerequisite(prerequisite_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str) -> CreateCourseRequest {
        CreateCourseRequest {
            name: format!("Disciplina {code}"),
            code: code.to_string(),
            credit_hours: 60,
        }
    }

    #[test]
    fn test_register_course_conflict_is_retained() {
        let mut catalog = CatalogService::new();
        catalog.register_course(course("CALC1")).unwrap();
        let err = catalog.register_course(course("CALC1")).unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(catalog.last_error(), Some(&err));
    }

    #[test]
    fn test_prerequisite_links() {
        let mut catalog = CatalogService::new();
        catalog.register_course(course("CALC1")).unwrap();
        catalog.register_course(course("CALC2")).unwrap();

        catalog.add_prerequisite("CALC2", "CALC1").unwrap();
        catalog.add_prerequisite("CALC2", "CALC1").unwrap();
        assert_eq!(
            catalog.get_course("CALC2").unwrap().prerequisites(),
            &["CALC1".to_string()]
        );

        assert_eq!(
            catalog.add_prerequisite("CALC2", "CALC2").unwrap_err().code(),
            "E001"
        );
        assert_eq!(
            catalog.add_prerequisite("CALC3", "CALC1").unwrap_err().code(),
            "E002"
        );
        assert_eq!(
            catalog.add_prerequisite("CALC2", "FIS1").unwrap_err().code(),
            "E002"
        );

        assert!(catalog.remove_prerequisite("CALC2", "CALC1").unwrap());
        assert!(!catalog.remove_prerequisite("CALC2", "CALC1").unwrap());
    }

    #[test]
    fn test_prerequisite_cycles_are_allowed() {
        let mut catalog = CatalogService::new();
        catalog.register_course(course("A")).unwrap();
        catalog.register_course(course("B")).unwrap();
        catalog.add_prerequisite("A", "B").unwrap();
        catalog.add_prerequisite("B", "A").unwrap();
        assert!(catalog.get_course("A").unwrap().has_prerequisite("B"));
        assert!(catalog.get_course("B").unwrap().has_prerequisite("A"));
    }
}
