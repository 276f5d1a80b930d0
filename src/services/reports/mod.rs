//! 文本报表
//!
//! 所有报表都是只读的，找不到对象时返回一行提示文字而不是错误。

pub mod classes;
pub mod courses;
pub mod professors;
pub mod transcripts;

use crate::services::AcademicRecords;

impl AcademicRecords {
    /// 教学班报表：名单中每个学生的成绩与出勤
    pub fn class_report(&self, class_code: &str) -> String {
        classes::class_report(self, class_code)
    }

    /// 课程报表：该课程开设的全部教学班
    pub fn course_report(&self, course_code: &str) -> String {
        courses::course_report(self, course_code)
    }

    /// 教师报表：该教师所授的全部教学班
    pub fn professor_report(&self, professor_id: &str) -> String {
        professors::professor_report(self, professor_id)
    }

    /// 学生成绩单（Boletim）
    pub fn student_transcript(
        &self,
        student_id: &str,
        term: &str,
        include_class_data: bool,
    ) -> String {
        transcripts::student_transcript(self, student_id, term, include_class_data)
    }
}
