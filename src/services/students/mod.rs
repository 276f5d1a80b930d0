pub mod register;
pub mod update;

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::models::students::requests::{RegisterStudentRequest, UpdateStudentRequest};

/// 学生登记簿，以学号为键
#[derive(Debug, Default)]
pub struct StudentService {
    students: BTreeMap<String, Student>,
}

impl StudentService {
    pub fn new() -> Self {
        Self::default()
    }

    // 注册学生
    pub fn register(&mut self, request: RegisterStudentRequest) -> Result<&Student> {
        register::register_student(self, request)
    }

    // 更新姓名与专业
    pub fn update(&mut self, id: &str, update: UpdateStudentRequest) -> Result<&Student> {
        update::update_student(self, id, update)
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    /// 按学号排序列出
    pub fn list(&self) -> Vec<&Student> {
        self.students.values().collect()
    }

    pub(crate) fn students_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.values_mut()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn clear(&mut self) {
        self.students.clear();
    }
}
