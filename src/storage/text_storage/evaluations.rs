use super::{FIELD_SEPARATOR, split_fields};
use crate::errors::Result;
use crate::models::evaluations::entities::Scores;
use crate::storage::EvaluationRow;

// 教学班;学号;p1;p2;p3;习题;研讨;总课时;出勤
pub fn parse_evaluation(line: &str) -> Result<EvaluationRow> {
    let f = split_fields(line, &[9], "Evaluation")?;
    let score = |i: usize| f[i].trim().parse::<f64>();

    Ok(EvaluationRow {
        class_code: f[0].to_string(),
        student_id: f[1].to_string(),
        scores: Scores::new(score(2)?, score(3)?, score(4)?, score(5)?, score(6)?),
        classes_held: f[7].trim().parse()?,
        classes_attended: f[8].trim().parse()?,
    })
}

/// 分数按完整精度写出
pub fn format_evaluation(row: &EvaluationRow) -> String {
    let sep = FIELD_SEPARATOR;
    let s = &row.scores;
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
        row.class_code,
        row.student_id,
        s.p1,
        s.p2,
        s.p3,
        s.exercises,
        s.seminar,
        row.classes_held,
        row.classes_attended
    )
}
