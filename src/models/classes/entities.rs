use std::collections::HashMap;

use super::requests::CreateClassRequest;
use crate::errors::{AcademicError, Result};
use crate::models::evaluations::entities::{EvaluationPolicy, ScoreCard, Scores};
use crate::models::students::entities::Student;
use crate::utils::validate_attendance;

/// 教学班（Turma）
///
/// 选课与评分的基本单位。名单按加入顺序保存，名单中的每个学生
/// 都恰好对应一份成绩记录。
#[derive(Debug, Clone)]
pub struct Class {
    code: String,
    course_code: String,
    professor_id: String,
    term: String,
    policy: EvaluationPolicy,
    in_person: bool,
    room: Option<String>,
    schedule: String,
    capacity: u32,
    roster: Vec<String>,
    records: HashMap<String, ScoreCard>,
}

impl Class {
    pub fn new(request: CreateClassRequest) -> Self {
        let room = if request.in_person {
            request.room.filter(|r| !r.trim().is_empty())
        } else {
            None
        };

        Self {
            code: request.code,
            course_code: request.course_code,
            professor_id: request.professor_id,
            term: request.term,
            policy: request.policy,
            in_person: request.in_person,
            room,
            schedule: request.schedule,
            capacity: request.capacity,
            roster: Vec::new(),
            records: HashMap::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn professor_id(&self) -> &str {
        &self.professor_id
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn policy(&self) -> EvaluationPolicy {
        self.policy
    }

    pub fn is_in_person(&self) -> bool {
        self.in_person
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// 已选学生学号（按加入顺序）
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn enrolled_count(&self) -> usize {
        self.roster.len()
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity as usize
    }

    pub fn contains(&self, student_id: &str) -> bool {
        self.roster.iter().any(|id| id == student_id)
    }

    /// 设置教室，线上教学班返回 false
    pub fn set_room<R: Into<String>>(&mut self, room: R) -> bool {
        if !self.in_person {
            return false;
        }
        self.room = Some(room.into());
        true
    }

    /// 学生加入教学班
    ///
    /// 名额已满或已在名单中时返回 false，且不修改名单与成绩记录。
    pub fn enroll_student(&mut self, student: &Student) -> bool {
        if self.is_full() || self.contains(student.id()) {
            return false;
        }
        self.roster.push(student.id().to_string());
        self.records
            .insert(student.id().to_string(), ScoreCard::with_policy(self.policy));
        true
    }

    /// 移出名单并删除成绩记录，不在名单中时什么也不做
    pub fn withdraw_student(&mut self, student_id: &str) {
        self.roster.retain(|id| id != student_id);
        self.records.remove(student_id);
    }

    /// 登记五项成绩（覆盖之前的成绩）
    ///
    /// - 任一分数不在 [0, 10]：返回校验错误
    /// - 特殊学生：返回 `Ok(false)`
    /// - 不在名单中：返回状态不一致错误，调用方应先确认选课关系
    pub fn record_grades(&mut self, student: &Student, scores: Scores) -> Result<bool> {
        scores.validate()?;

        if !student.receives_grades() {
            return Ok(false);
        }

        let card = self.card_mut(student.id())?;
        card.set_scores(scores);
        Ok(true)
    }

    /// 登记出勤（覆盖之前的计数）
    pub fn record_attendance(
        &mut self,
        student: &Student,
        classes_held: i64,
        classes_attended: i64,
    ) -> Result<bool> {
        validate_attendance(classes_held, classes_attended)?;
        let held = u32::try_from(classes_held)
            .map_err(|_| AcademicError::validation("Number of classes held is too large"))?;
        let attended = u32::try_from(classes_attended)
            .map_err(|_| AcademicError::validation("Number of classes attended is too large"))?;

        let card = self.card_mut(student.id())?;
        card.set_attendance(held, attended);
        Ok(true)
    }

    pub fn score_card(&self, student_id: &str) -> Option<&ScoreCard> {
        self.records.get(student_id)
    }

    /// 从持久化数据恢复成绩记录，不经过学生类型检查
    pub(crate) fn restore_score_card(
        &mut self,
        student_id: &str,
        scores: Scores,
        classes_held: u32,
        classes_attended: u32,
    ) -> bool {
        let policy = self.policy;
        match self.records.get_mut(student_id) {
            Some(card) => {
                card.set_policy(policy);
                card.set_scores(scores);
                card.set_attendance(classes_held, classes_attended);
                true
            }
            None => false,
        }
    }

    fn card_mut(&mut self, student_id: &str) -> Result<&mut ScoreCard> {
        let code = &self.code;
        self.records.get_mut(student_id).ok_or_else(|| {
            AcademicError::inconsistent_state(format!(
                "Student {student_id} is not enrolled in class {code}"
            ))
        })
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Class {}
