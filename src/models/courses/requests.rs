// 注册课程请求
#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub name: String,
    pub code: String,
    pub credit_hours: u32,
}
