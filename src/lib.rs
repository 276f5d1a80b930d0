//! Academic Records - 学籍管理系统
//!
//! 管理学生、教师、课程与教学班，负责选课、成绩与出勤登记及报表生成。
//!
//! # 架构
//! - `config`: 配置管理
//! - `console`: 交互式控制台
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（文本文件）
//! - `utils`: 工具函数

pub mod config;
pub mod console;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
