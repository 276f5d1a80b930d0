use tracing::{debug, info};

use super::CatalogService;
use crate::errors::{AcademicError, Result};
use crate::models::professors::entities::Professor;
use crate::models::professors::requests::{RegisterProfessorRequest, UpdateProfessorRequest};
use crate::utils::{require, validate_identifier, validate_text_field};

pub fn register_professor(
    service: &mut CatalogService,
    request: RegisterProfessorRequest,
) -> Result<()> {
    require("Name", validate_text_field(&request.name))?;
    require("Professor id", validate_identifier(&request.id))?;
    require("Department", validate_text_field(&request.department))?;

    if service.professors.contains_key(&request.id) {
        debug!("Rejected duplicate professor id {}", request.id);
        return Err(AcademicError::conflict(format!(
            "A professor with id {} already exists",
            request.id
        )));
    }

    let professor = Professor::new(
        request.name.trim(),
        request.id.clone(),
        request.department.trim(),
    );
    info!("Registered professor {}", request.id);
    service.professors.insert(request.id, professor);
    Ok(())
}

pub fn update_professor(
    service: &mut CatalogService,
    id: &str,
    update: UpdateProfessorRequest,
) -> Result<()> {
    if let Some(name) = &update.name {
        require("Name", validate_text_field(name))?;
    }
    if let Some(department) = &update.department {
        require("Department", validate_text_field(department))?;
    }

    let professor = service
        .professors
        .get_mut(id)
        .ok_or_else(|| AcademicError::not_found(format!("Professor {id} not found")))?;

    if let Some(name) = update.name {
        professor.set_name(name.trim());
    }
    if let Some(department) = update.department {
        professor.department = department.trim().to_string();
    }
    info!("Updated professor {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str) -> RegisterProfessorRequest {
        RegisterProfessorRequest {
            name: "Maria Souza".to_string(),
            id: id.to_string(),
            department: "Matemática".to_string(),
        }
    }

    #[test]
    fn test_register_and_update_professor() {
        let mut catalog = CatalogService::new();
        catalog.register_professor(request("P01")).unwrap();
        catalog
            .update_professor(
                "P01",
                UpdateProfessorRequest {
                    name: None,
                    department: Some("Estatística".to_string()),
                },
            )
            .unwrap();

        let professor = catalog.get_professor("P01").unwrap();
        assert_eq!(professor.department, "Estatística");
        assert_eq!(professor.name(), "Maria Souza");
    }

    #[test]
    fn test_duplicate_and_missing_professor() {
        let mut catalog = CatalogService::new();
        catalog.register_professor(request("P01")).unwrap();
        assert_eq!(
            catalog.register_professor(request("P01")).unwrap_err().code(),
            "E004"
        );
        assert_eq!(
            catalog
                .update_professor("P99", UpdateProfessorRequest::default())
                .unwrap_err()
                .code(),
            "E002"
        );
        assert_eq!(catalog.last_error().unwrap().code(), "E002");
    }
}
