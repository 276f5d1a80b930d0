use std::sync::Arc;

use crate::config::StorageConfig;
use crate::errors::Result;

pub mod rows;
pub mod text_storage;

pub use rows::{
    CatalogRows, ClassRow, CourseRow, EvaluationRow, ProfessorRow, StudentRow,
};

/// 持久化后端
///
/// 三类数据各自整体读写。读取时文件不存在视为空集合（首次运行），
/// 无法解析的单行记录由实现自行跳过并记录日志。
pub trait Storage: Send + Sync {
    /// 学生
    // 读取全部学生
    fn load_students(&self) -> Result<Vec<StudentRow>>;
    // 覆盖保存全部学生
    fn save_students(&self, rows: &[StudentRow]) -> Result<()>;

    /// 教师、课程与教学班
    // 读取课程目录
    fn load_catalog(&self) -> Result<CatalogRows>;
    // 覆盖保存课程目录
    fn save_catalog(&self, catalog: &CatalogRows) -> Result<()>;

    /// 成绩与出勤
    // 读取全部成绩记录
    fn load_evaluations(&self) -> Result<Vec<EvaluationRow>>;
    // 覆盖保存全部成绩记录
    fn save_evaluations(&self, rows: &[EvaluationRow]) -> Result<()>;
}

pub fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>> {
    let storage = text_storage::TextStorage::new(config)?;
    Ok(Arc::new(storage))
}
