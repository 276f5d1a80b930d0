use std::fmt::Write;

use crate::services::AcademicRecords;

pub const PROFESSOR_NOT_FOUND: &str = "Professor não encontrado ou sem turmas";

pub fn professor_report(records: &AcademicRecords, professor_id: &str) -> String {
    let classes = records.catalog.classes_of_professor(professor_id);
    let professor = match records.catalog.get_professor(professor_id) {
        Some(professor) if !classes.is_empty() => professor,
        _ => return PROFESSOR_NOT_FOUND.to_string(),
    };

    let mut report = String::new();
    let _ = writeln!(
        report,
        "Relatório do Professor: {} ({})",
        professor.name(),
        professor.id()
    );
    let _ = writeln!(report, "Departamento: {}\n", professor.department);

    for class in classes {
        let course_name = records
            .catalog
            .get_course(class.course_code())
            .map_or(class.course_code(), |c| c.name.as_str());
        let _ = writeln!(report, "Turma: {}", class.code());
        let _ = writeln!(report, "Disciplina: {course_name}");
        let _ = writeln!(report, "Semestre: {}", class.term());
        let _ = writeln!(report, "Alunos Matriculados: {}\n", class.enrolled_count());
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::professors::requests::RegisterProfessorRequest;
    use crate::services::tests::sample_records;

    #[test]
    fn test_professor_report() {
        let records = sample_records();
        let report = records.professor_report("P01");
        assert!(report.starts_with("Relatório do Professor: Maria Souza (P01)\n"));
        assert!(report.contains("Departamento: Matemática\n"));
        assert!(report.contains("Turma: CALC1-2024-1\nDisciplina: Cálculo 1\n"));
        assert!(report.contains("Turma: CALC2-2024-1\nDisciplina: Cálculo 2\n"));
    }

    #[test]
    fn test_professor_without_classes() {
        let mut records = sample_records();
        records
            .catalog_mut()
            .register_professor(RegisterProfessorRequest {
                name: "Carla Dias".to_string(),
                id: "P03".to_string(),
                department: "Química".to_string(),
            })
            .unwrap();
        assert_eq!(records.professor_report("P03"), PROFESSOR_NOT_FOUND);
        assert_eq!(records.professor_report("P99"), PROFESSOR_NOT_FOUND);
    }
}
