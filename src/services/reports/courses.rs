use std::fmt::Write;

use crate::services::AcademicRecords;

pub const COURSE_NOT_FOUND: &str = "Disciplina não encontrada";

pub fn course_report(records: &AcademicRecords, course_code: &str) -> String {
    let Some(course) = records.catalog.get_course(course_code) else {
        return COURSE_NOT_FOUND.to_string();
    };

    let mut report = String::new();
    let _ = writeln!(
        report,
        "Relatório da Disciplina: {} ({})",
        course.name,
        course.code()
    );
    let _ = writeln!(report, "Carga Horária: {} horas\n", course.credit_hours);

    for class in records.catalog.classes_of_course(course_code) {
        let professor_name = records
            .catalog
            .get_professor(class.professor_id())
            .map_or(class.professor_id(), |p| p.name());
        let _ = writeln!(report, "Turma: {}", class.code());
        let _ = writeln!(report, "Professor: {professor_name}");
        let _ = writeln!(report, "Semestre: {}", class.term());
        let _ = writeln!(report, "Alunos Matriculados: {}\n", class.enrolled_count());
    }
    report
}
