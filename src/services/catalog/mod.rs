//! 课程目录：课程、教师与教学班的登记簿
//!
//! 三类实体各自以代码/工号为键保存，实体之间只通过代码互相引用。
//! 失败的操作会把原因保留在 `last_error` 中，供前端展示。

pub mod classes;
pub mod courses;
pub mod professors;

use std::collections::BTreeMap;

use crate::errors::{AcademicError, Result};
use crate::models::classes::entities::Class;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::professors::entities::Professor;
use crate::models::professors::requests::{RegisterProfessorRequest, UpdateProfessorRequest};

#[derive(Debug, Default)]
pub struct CatalogService {
    courses: BTreeMap<String, Course>,
    classes: BTreeMap<String, Class>,
    professors: BTreeMap<String, Professor>,
    last_error: Option<AcademicError>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次失败的原因
    pub fn last_error(&self) -> Option<&AcademicError> {
        self.last_error.as_ref()
    }

    fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.last_error = Some(e.clone());
        }
        result
    }

    // 课程
    pub fn register_course(&mut self, request: CreateCourseRequest) -> Result<()> {
        let result = courses::register_course(self, request);
        self.track(result)
    }

    pub fn add_prerequisite(&mut self, course_code: &str, prerequisite_code: &str) -> Result<()> {
        let result = courses::add_prerequisite(self, course_code, prerequisite_code);
        self.track(result)
    }

    pub fn remove_prerequisite(
        &mut self,
        course_code: &str,
        prerequisite_code: &str,
    ) -> Result<bool> {
        let result = courses::remove_prerequisite(self, course_code, prerequisite_code);
        self.track(result)
    }

    // 教师
    pub fn register_professor(&mut self, request: RegisterProfessorRequest) -> Result<()> {
        let result = professors::register_professor(self, request);
        self.track(result)
    }

    pub fn update_professor(&mut self, id: &str, update: UpdateProfessorRequest) -> Result<()> {
        let result = professors::update_professor(self, id, update);
        self.track(result)
    }

    // 教学班
    pub fn create_class(&mut self, request: CreateClassRequest) -> Result<()> {
        let result = classes::create_class(self, request);
        self.track(result)
    }

    pub fn set_room(&mut self, class_code: &str, room: &str) -> Result<()> {
        let result = classes::set_room(self, class_code, room);
        self.track(result)
    }

    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn get_class(&self, code: &str) -> Option<&Class> {
        self.classes.get(code)
    }

    pub fn get_class_mut(&mut self, code: &str) -> Option<&mut Class> {
        self.classes.get_mut(code)
    }

    pub fn get_professor(&self, id: &str) -> Option<&Professor> {
        self.professors.get(id)
    }

    pub fn list_courses(&self) -> Vec<&Course> {
        self.courses.values().collect()
    }

    pub fn list_classes(&self) -> Vec<&Class> {
        self.classes.values().collect()
    }

    pub fn list_professors(&self) -> Vec<&Professor> {
        self.professors.values().collect()
    }

    /// 某门课程开设的教学班（按开设顺序）
    pub fn classes_of_course(&self, course_code: &str) -> Vec<&Class> {
        self.courses
            .get(course_code)
            .map(|course| {
                course
                    .classes()
                    .iter()
                    .filter_map(|code| self.classes.get(code))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 某位教师所授教学班（按开设顺序）
    pub fn classes_of_professor(&self, professor_id: &str) -> Vec<&Class> {
        self.professors
            .get(professor_id)
            .map(|professor| {
                professor
                    .classes_taught()
                    .iter()
                    .filter_map(|code| self.classes.get(code))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 教师是否已有相同时间段的教学班（按字符串完全相等判断）
    pub fn has_schedule_conflict(&self, professor_id: &str, schedule: &str) -> bool {
        self.classes_of_professor(professor_id)
            .iter()
            .any(|class| class.schedule() == schedule)
    }

    pub(crate) fn classes_mut(&mut self) -> impl Iterator<Item = &mut Class> {
        self.classes.values_mut()
    }

    pub fn clear(&mut self) {
        self.courses.clear();
        self.classes.clear();
        self.professors.clear();
        self.last_error = None;
    }
}
