use std::fmt::Write;

use crate::services::AcademicRecords;

pub const STUDENT_NOT_FOUND: &str = "Aluno não encontrado ou sem matrículas no semestre";

/// 学生在某学期的成绩单
///
/// 只统计该学期、且学生在名单中的教学班。`include_class_data` 为真时
/// 额外输出教师、授课方式与学时。
pub fn student_transcript(
    records: &AcademicRecords,
    student_id: &str,
    term: &str,
    include_class_data: bool,
) -> String {
    let classes: Vec<_> = records
        .catalog
        .list_classes()
        .into_iter()
        .filter(|class| class.term() == term && class.contains(student_id))
        .collect();

    let student = match records.students.get(student_id) {
        Some(student) if !classes.is_empty() => student,
        _ => return STUDENT_NOT_FOUND.to_string(),
    };

    let mut transcript = String::new();
    let _ = writeln!(
        transcript,
        "Boletim do Aluno: {} ({})",
        student.name(),
        student.id()
    );
    let _ = writeln!(transcript, "Curso: {}", student.course_of_study);
    let _ = writeln!(transcript, "Semestre: {term}\n");

    for class in classes {
        let course = records.catalog.get_course(class.course_code());
        let _ = writeln!(
            transcript,
            "Disciplina: {} ({})",
            course.map_or("", |c| c.name.as_str()),
            class.course_code()
        );

        if include_class_data {
            let professor_name = records
                .catalog
                .get_professor(class.professor_id())
                .map_or(class.professor_id(), |p| p.name());
            let modality = if class.is_in_person() {
                "Presencial"
            } else {
                "Remota"
            };
            let _ = writeln!(transcript, "Professor: {professor_name}");
            let _ = writeln!(transcript, "Modalidade: {modality}");
            let _ = writeln!(
                transcript,
                "Carga Horária: {} horas",
                course.map_or(0, |c| c.credit_hours)
            );
        }

        if let Some(card) = class.score_card(student_id) {
            let _ = writeln!(transcript, "{card}\n");
        }
    }
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluations::entities::Scores;
    use crate::services::tests::sample_records;

    #[test]
    fn test_transcript_with_class_data() {
        let mut records = sample_records();
        records.enroll("A1", "CALC1", "CALC1-2024-1").unwrap();
        records.enroll("A1", "FIS1", "FIS1-2024-1").unwrap();
        records
            .record_grades("FIS1-2024-1", "A1", Scores::new(9.0, 9.0, 9.0, 9.0, 9.0))
            .unwrap();
        records.record_attendance("FIS1-2024-1", "A1", 60, 40).unwrap();

        let transcript = records.student_transcript("A1", "2024.1", true);
        assert!(transcript.starts_with("Boletim do Aluno: Ana Lima (A1)\n"));
        assert!(transcript.contains("Curso: Engenharia de Software\n"));
        assert!(transcript.contains("Disciplina: Cálculo 1 (CALC1)\n"));
        assert!(transcript.contains("Modalidade: Presencial\n"));
        assert!(transcript.contains("Modalidade: Remota\n"));
        assert!(transcript.contains("Carga Horária: 90 horas\n"));
        assert!(transcript.contains("Situação: Reprovado por Falta"));
    }

    #[test]
    fn test_transcript_without_class_data() {
        let mut records = sample_records();
        records.enroll("A1", "CALC1", "CALC1-2024-1").unwrap();

        let transcript = records.student_transcript("A1", "2024.1", false);
        assert!(!transcript.contains("Modalidade"));
        assert!(transcript.contains("Situação: Reprovado por Falta"));
    }

    #[test]
    fn test_transcript_other_term_or_student() {
        let mut records = sample_records();
        records.enroll("A1", "CALC1", "CALC1-2024-1").unwrap();
        assert_eq!(
            records.student_transcript("A1", "2023.2", false),
            STUDENT_NOT_FOUND
        );
        assert_eq!(
            records.student_transcript("ZZ", "2024.1", false),
            STUDENT_NOT_FOUND
        );
    }
}
