// 注册教师请求
#[derive(Debug, Clone)]
pub struct RegisterProfessorRequest {
    pub name: String,
    pub id: String,
    pub department: String,
}

// 更新教师请求（工号不可修改）
#[derive(Debug, Clone, Default)]
pub struct UpdateProfessorRequest {
    pub name: Option<String>,
    pub department: Option<String>,
}
