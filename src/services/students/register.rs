use tracing::{debug, info};

use super::StudentService;
use crate::errors::{AcademicError, Result};
use crate::models::students::entities::Student;
use crate::models::students::requests::RegisterStudentRequest;
use crate::utils::{require, validate_identifier, validate_text_field};

pub fn register_student(
    service: &mut StudentService,
    request: RegisterStudentRequest,
) -> Result<&Student> {
    require("Name", validate_text_field(&request.name))?;
    require("Student id", validate_identifier(&request.id))?;
    // 专业可以留空，保存时写为占位值
    if !request.course_of_study.trim().is_empty() {
        require("Course of study", validate_text_field(&request.course_of_study))?;
    }

    if service.students.contains_key(&request.id) {
        debug!("Rejected duplicate student id {}", request.id);
        return Err(AcademicError::conflict(format!(
            "A student with id {} already exists",
            request.id
        )));
    }

    let student = Student::new(
        request.name.trim(),
        request.id.clone(),
        request.course_of_study.trim(),
        request.kind,
    );
    info!("Registered {} student {}", request.kind, request.id);

    Ok(service.students.entry(request.id).or_insert(student))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::StudentKind;

    fn request(id: &str, kind: StudentKind) -> RegisterStudentRequest {
        RegisterStudentRequest {
            name: "Lucas Martins".to_string(),
            id: id.to_string(),
            course_of_study: "Engenharia de Software".to_string(),
            kind,
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut service = StudentService::new();
        let student = service
            .register(request("230011842", StudentKind::Special))
            .unwrap();
        assert_eq!(student.kind(), StudentKind::Special);
        assert!(service.contains("230011842"));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_duplicate_id_is_conflict() {
        let mut service = StudentService::new();
        service
            .register(request("100", StudentKind::Standard))
            .unwrap();
        let err = service
            .register(request("100", StudentKind::Special))
            .unwrap_err();
        assert_eq!(err.code(), "E004");
        assert_eq!(service.get("100").unwrap().kind(), StudentKind::Standard);
    }

    #[test]
    fn test_invalid_fields_are_rejected() {
        let mut service = StudentService::new();
        let mut bad = request("100", StudentKind::Standard);
        bad.name = "  ".to_string();
        assert_eq!(service.register(bad).unwrap_err().code(), "E001");

        let bad = request("1 00", StudentKind::Standard);
        assert_eq!(service.register(bad).unwrap_err().code(), "E001");
        assert!(service.is_empty());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut service = StudentService::new();
        for id in ["300", "100", "200"] {
            service.register(request(id, StudentKind::Standard)).unwrap();
        }
        let ids: Vec<&str> = service.list().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["100", "200", "300"]);
    }
}
