use tracing::{debug, info, warn};

use super::CatalogService;
use crate::errors::{AcademicError, Result};
use crate::models::classes::entities::Class;
use crate::models::classes::requests::CreateClassRequest;
use crate::utils::{require, validate_capacity, validate_identifier, validate_text_field};

/// 开设教学班
///
/// 成功后教学班代码会同时追加到课程的教学班列表与教师的授课列表。
pub fn create_class(service: &mut CatalogService, request: CreateClassRequest) -> Result<()> {
    require("Class code", validate_identifier(&request.code))?;
    require("Term", validate_text_field(&request.term))?;
    require("Schedule", validate_text_field(&request.schedule))?;
    validate_capacity(request.capacity)?;
    if request.in_person
        && let Some(room) = request.room.as_deref().filter(|r| !r.trim().is_empty())
    {
        require("Room", validate_text_field(room))?;
    }

    if service.classes.contains_key(&request.code) {
        debug!("Rejected duplicate class code {}", request.code);
        return Err(AcademicError::conflict(format!(
            "A class with code {} already exists",
            request.code
        )));
    }
    if !service.courses.contains_key(&request.course_code) {
        return Err(AcademicError::not_found(format!(
            "Course {} not found",
            request.course_code
        )));
    }
    if !service.professors.contains_key(&request.professor_id) {
        return Err(AcademicError::not_found(format!(
            "Professor {} not found",
            request.professor_id
        )));
    }
    if service.has_schedule_conflict(&request.professor_id, &request.schedule) {
        warn!(
            "Professor {} already teaches a class at {}",
            request.professor_id, request.schedule
        );
        return Err(AcademicError::conflict(format!(
            "Schedule conflict: professor {} already teaches at {}",
            request.professor_id, request.schedule
        )));
    }

    let class = Class::new(request);
    let code = class.code().to_string();

    if let Some(course) = service.courses.get_mut(class.course_code()) {
        course.add_class(code.clone());
    }
    if let Some(professor) = service.professors.get_mut(class.professor_id()) {
        professor.add_class(code.clone());
    }

    info!(
        "Created class {} of course {} ({})",
        code,
        class.course_code(),
        class.term()
    );
    service.classes.insert(code, class);
    Ok(())
}

/// 为线下教学班设置教室
pub fn set_room(service: &mut CatalogService, class_code: &str, room: &str) -> Result<()> {
    require("Room", validate_text_field(room))?;

    let class = service
        .classes
        .get_mut(class_code)
        .ok_or_else(|| AcademicError::not_found(format!("Class {class_code} not found")))?;

    if !class.set_room(room.trim()) {
        return Err(AcademicError::not_eligible(format!(
            "Class {class_code} is remote and has no room"
        )));
    }
    info!("Class {} assigned to room {}", class_code, room.trim());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::evaluations::entities::EvaluationPolicy;
    use crate::models::professors::requests::RegisterProfessorRequest;

    fn catalog() -> CatalogService {
        let mut catalog = CatalogService::new();
        catalog
            .register_course(CreateCourseRequest {
                name: "Cálculo 1".to_string(),
                code: "CALC1".to_string(),
                credit_hours: 90,
            })
            .unwrap();
        catalog
            .register_professor(RegisterProfessorRequest {
                name: "Maria Souza".to_string(),
                id: "P01".to_string(),
                department: "Matemática".to_string(),
            })
            .unwrap();
        catalog
    }

    fn class(code: &str, schedule: &str) -> CreateClassRequest {
        CreateClassRequest {
            code: code.to_string(),
            course_code: "CALC1".to_string(),
            professor_id: "P01".to_string(),
            term: "2024.1".to_string(),
            policy: EvaluationPolicy::Weighted,
            in_person: true,
            schedule: schedule.to_string(),
            capacity: 40,
            room: Some("S1".to_string()),
        }
    }

    #[test]
    fn test_create_class_links_course_and_professor() {
        let mut catalog = catalog();
        catalog.create_class(class("CALC1-A", "SEG 08:00")).unwrap();

        assert_eq!(
            catalog.get_course("CALC1").unwrap().classes(),
            &["CALC1-A".to_string()]
        );
        assert_eq!(
            catalog.get_professor("P01").unwrap().classes_taught(),
            &["CALC1-A".to_string()]
        );
        assert_eq!(catalog.get_class("CALC1-A").unwrap().room(), Some("S1"));
        assert_eq!(catalog.classes_of_course("CALC1").len(), 1);
    }

    #[test]
    fn test_schedule_conflict_is_rejected() {
        let mut catalog = catalog();
        catalog.create_class(class("CALC1-A", "SEG 08:00")).unwrap();

        let err = catalog
            .create_class(class("CALC1-B", "SEG 08:00"))
            .unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(catalog.last_error().unwrap().message().contains("SEG 08:00"));
        assert!(catalog.get_class("CALC1-B").is_none());

        // 不同时间段可以开设
        catalog.create_class(class("CALC1-B", "TER 08:00")).unwrap();
        assert_eq!(catalog.classes_of_professor("P01").len(), 2);
    }

    #[test]
    fn test_create_class_rejections() {
        let mut catalog = catalog();
        catalog.create_class(class("CALC1-A", "SEG 08:00")).unwrap();
        assert_eq!(
            catalog
                .create_class(class("CALC1-A", "QUA 08:00"))
                .unwrap_err()
                .code(),
            "E004"
        );

        let mut unknown_course = class("X-A", "QUI 08:00");
        unknown_course.course_code = "FIS1".to_string();
        assert_eq!(catalog.create_class(unknown_course).unwrap_err().code(), "E002");

        let mut unknown_professor = class("X-B", "QUI 08:00");
        unknown_professor.professor_id = "P99".to_string();
        assert_eq!(
            catalog.create_class(unknown_professor).unwrap_err().code(),
            "E002"
        );

        let mut empty = class("X-C", "QUI 08:00");
        empty.capacity = 0;
        assert_eq!(catalog.create_class(empty).unwrap_err().code(), "E001");
    }

    #[test]
    fn test_set_room() {
        let mut catalog = catalog();
        catalog.create_class(class("CALC1-A", "SEG 08:00")).unwrap();
        let mut remote = class("CALC1-R", "SEX 19:00");
        remote.in_person = false;
        remote.room = None;
        catalog.create_class(remote).unwrap();

        catalog.set_room("CALC1-A", "S2").unwrap();
        assert_eq!(catalog.get_class("CALC1-A").unwrap().room(), Some("S2"));

        assert_eq!(catalog.set_room("CALC1-R", "S3").unwrap_err().code(), "E003");
        assert_eq!(catalog.get_class("CALC1-R").unwrap().room(), None);
        assert_eq!(catalog.set_room("NOPE", "S3").unwrap_err().code(), "E002");
    }
}
