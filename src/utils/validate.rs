use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AcademicError, Result};

/// 分数上下限
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("Invalid identifier regex"));

static TEXT_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^;\r\n]+$").expect("Invalid text field regex"));

/// 校验学号、工号、课程代码、教学班代码
pub fn validate_identifier(id: &str) -> std::result::Result<(), &'static str> {
    // 长度校验：1 <= x <= 32
    if id.is_empty() || id.len() > 32 {
        return Err("Identifier length must be between 1 and 32 characters");
    }
    // 格式校验：字母或数字开头，只能包含字母、数字、点、下划线或连字符
    if !IDENTIFIER_RE.is_match(id) {
        return Err(
            "Identifier must start with a letter or digit and contain only letters, digits, '.', '_' or '-'",
        );
    }
    Ok(())
}

/// 校验自由文本字段（姓名、专业、院系、学期、时间段、教室）
///
/// 分号和换行会破坏持久化文件的行格式，因此一律拒绝。
pub fn validate_text_field(value: &str) -> std::result::Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Field must not be empty");
    }
    if !TEXT_FIELD_RE.is_match(value) {
        return Err("Field must not contain ';' or line breaks");
    }
    Ok(())
}

/// 校验单项分数，必须位于 [0, 10]
pub fn validate_score(label: &str, score: f64) -> Result<()> {
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AcademicError::validation(format!(
            "Score {label} must be between 0 and 10, got {score}"
        )));
    }
    Ok(())
}

/// 校验出勤数据
pub fn validate_attendance(classes_held: i64, classes_attended: i64) -> Result<()> {
    if classes_held <= 0 {
        return Err(AcademicError::validation(
            "Number of classes held must be greater than zero",
        ));
    }
    if classes_attended < 0 {
        return Err(AcademicError::validation(
            "Number of classes attended must not be negative",
        ));
    }
    if classes_attended > classes_held {
        return Err(AcademicError::validation(format!(
            "Classes attended ({classes_attended}) cannot exceed classes held ({classes_held})"
        )));
    }
    Ok(())
}

/// 校验教学班容量
pub fn validate_capacity(capacity: u32) -> Result<()> {
    if capacity == 0 {
        return Err(AcademicError::validation(
            "Class capacity must be greater than zero",
        ));
    }
    Ok(())
}

/// 将 `&'static str` 校验结果包装为带字段名的校验错误
pub fn require(field: &str, check: std::result::Result<(), &'static str>) -> Result<()> {
    check.map_err(|reason| AcademicError::validation(format!("{field}: {reason}")))
}
