//! 持久化记录
//!
//! 与文件中的一行一一对应，不含任何业务规则。

use crate::models::evaluations::entities::{EvaluationPolicy, Scores};
use crate::models::students::entities::StudentKind;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub kind: StudentKind,
    pub name: String,
    pub id: String,
    pub course_of_study: String,
    pub semester_locked: bool,
    pub enrolled_courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfessorRow {
    pub name: String,
    pub id: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub name: String,
    pub code: String,
    pub credit_hours: u32,
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassRow {
    pub code: String,
    pub course_code: String,
    pub professor_id: String,
    pub term: String,
    pub policy: EvaluationPolicy,
    pub in_person: bool,
    pub schedule: String,
    pub capacity: u32,
    pub room: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRow {
    pub class_code: String,
    pub student_id: String,
    pub scores: Scores,
    pub classes_held: u32,
    pub classes_attended: u32,
}

/// 课程目录文件的全部内容
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRows {
    pub professors: Vec<ProfessorRow>,
    pub courses: Vec<CourseRow>,
    pub classes: Vec<ClassRow>,
}
