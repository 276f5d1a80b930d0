use crate::models::evaluations::entities::EvaluationPolicy;

// 创建教学班请求
//
// # room 字段说明
// - 仅线下教学班（in_person = true）生效，线上教学班忽略
//
// # schedule 字段说明
// - 自由格式字符串（例如 "SEG 14:00-15:40"），冲突检测按字符串完全相等比较
#[derive(Debug, Clone)]
pub struct CreateClassRequest {
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
