use super::{FIELD_SEPARATOR, LIST_SEPARATOR, or_not_informed, split_fields, split_list};
use crate::errors::{AcademicError, Result};
use crate::models::students::entities::StudentKind;
use crate::storage::StudentRow;

// 类型;姓名;学号;专业[;锁定;已选课程]
// 旧文件只有前四列
pub fn parse_student(line: &str) -> Result<StudentRow> {
    let fields = split_fields(line, &[4, 6], "Student")?;
    let kind: StudentKind = fields[0].parse().map_err(AcademicError::parse)?;

    let (semester_locked, enrolled_courses) = if fields.len() == 6 {
        (fields[4].trim().parse::<bool>()?, split_list(fields[5]))
    } else {
        (false, Vec::new())
    };

    Ok(StudentRow {
        kind,
        name: fields[1].to_string(),
        id: fields[2].to_string(),
        course_of_study: fields[3].to_string(),
        semester_locked,
        enrolled_courses,
    })
}

pub fn format_student(row: &StudentRow) -> String {
    let sep = FIELD_SEPARATOR;
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
        row.kind,
        row.name,
        row.id,
        or_not_informed(&row.course_of_study),
        row.semester_locked,
        row.enrolled_courses.join(&LIST_SEPARATOR.to_string())
    )
}
