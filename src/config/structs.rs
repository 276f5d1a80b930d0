use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
    pub log_dir: String, // 日志目录（标准输出留给控制台界面）
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,         // 数据文件所在目录
    pub students_file: String,    // 学生文件
    pub catalog_file: String,     // 教师、课程、教学班文件
    pub evaluations_file: String, // 成绩与出勤文件
    pub autosave: bool,           // 每次成功修改后立即保存
}
