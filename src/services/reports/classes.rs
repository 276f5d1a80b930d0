use std::fmt::Write;

use crate::services::AcademicRecords;

pub const CLASS_NOT_FOUND: &str = "Turma não encontrada";

pub fn class_report(records: &AcademicRecords, class_code: &str) -> String {
    let Some(class) = records.catalog.get_class(class_code) else {
        return CLASS_NOT_FOUND.to_string();
    };

    let course_name = records
        .catalog
        .get_course(class.course_code())
        .map_or(class.course_code(), |c| c.name.as_str());
    let professor_name = records
        .catalog
        .get_professor(class.professor_id())
        .map_or(class.professor_id(), |p| p.name());

    let mut report = String::new();
    let _ = writeln!(report, "Relatório da Turma: {}", class.code());
    let _ = writeln!(report, "Disciplina: {course_name}");
    let _ = writeln!(report, "Professor: {professor_name}");
    let _ = writeln!(report, "Semestre: {}\n", class.term());

    for student_id in class.roster() {
        let Some(card) = class.score_card(student_id) else {
            continue;
        };
        let name = records
            .students
            .get(student_id)
            .map_or("", |s| s.name());
        let _ = writeln!(report, "Aluno: {name} ({student_id})");
        let _ = writeln!(report, "{card}\n");
    }
    report
}
