use super::entities::StudentKind;

// 注册学生请求
#[derive(Debug, Clone)]
pub struct RegisterStudentRequest {
    pub name: String,
    pub id: String,
    pub course_of_study: String,
    pub kind: StudentKind,
}

// 更新学生请求（学号不可修改）
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub course_of_study: Option<String>,
}
