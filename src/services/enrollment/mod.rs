//! 选课与评分流程
//!
//! 这些操作同时涉及学生与教学班，因此挂在 `AcademicRecords` 上。

pub mod enroll;
pub mod evaluations;
pub mod semester;

use crate::errors::Result;
use crate::models::evaluations::entities::Scores;
use crate::services::AcademicRecords;

impl AcademicRecords {
    /// 选课：学生选修课程，并加入该课程的指定教学班
    pub fn enroll(&mut self, student_id: &str, course_code: &str, class_code: &str) -> Result<()> {
        enroll::enroll(self, student_id, course_code, class_code)
    }

    /// 退课：退出该课程的全部教学班，成绩记录一并删除
    pub fn withdraw_course(&mut self, student_id: &str, course_code: &str) -> Result<()> {
        enroll::withdraw_course(self, student_id, course_code)
    }

    pub fn lock_semester(&mut self, student_id: &str) -> Result<()> {
        semester::lock_semester(self, student_id)
    }

    pub fn unlock_semester(&mut self, student_id: &str) -> Result<()> {
        semester::unlock_semester(self, student_id)
    }

    /// 登记成绩，特殊学生返回 `Ok(false)`
    pub fn record_grades(
        &mut self,
        class_code: &str,
        student_id: &str,
        scores: Scores,
    ) -> Result<bool> {
        evaluations::record_grades(self, class_code, student_id, scores)
    }

    pub fn record_attendance(
        &mut self,
        class_code: &str,
        student_id: &str,
        classes_held: i64,
        classes_attended: i64,
    ) -> Result<bool> {
        evaluations::record_attendance(self, class_code, student_id, classes_held, classes_attended)
    }
}
