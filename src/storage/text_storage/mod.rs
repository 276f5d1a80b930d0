//! 文本文件存储
//!
//! UTF-8，每行一条记录，字段以 `;` 分隔。

mod catalog;
mod evaluations;
mod students;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::StorageConfig;
use crate::errors::{AcademicError, Result};
use crate::storage::{CatalogRows, EvaluationRow, Storage, StudentRow};

pub(crate) const FIELD_SEPARATOR: char = ';';
pub(crate) const LIST_SEPARATOR: char = ',';
/// 空文本字段写入文件时使用的占位值
pub(crate) const NOT_INFORMED: &str = "Não informado";

/// 文本文件存储实现
#[derive(Debug, Clone)]
pub struct TextStorage {
    students_path: PathBuf,
    catalog_path: PathBuf,
    evaluations_path: PathBuf,
}

impl TextStorage {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let data_dir = Path::new(&config.data_dir);
        if !data_dir.as_os_str().is_empty() && !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(|e| {
                AcademicError::file_operation(format!(
                    "Failed to create data directory {}: {e}",
                    data_dir.display()
                ))
            })?;
            info!("Created data directory {}", data_dir.display());
        }

        Ok(Self {
            students_path: config.students_path(),
            catalog_path: config.catalog_path(),
            evaluations_path: config.evaluations_path(),
        })
    }

    /// 读取文件中的非空行，文件不存在时返回空列表
    fn read_lines(path: &Path) -> Result<Vec<(usize, String)>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{} not found, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AcademicError::file_operation(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        Ok(content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| (number, line.to_string()))
            .collect())
    }

    /// 解析每一行，失败的行记录警告后跳过
    fn parse_lines<T>(path: &Path, parse: impl Fn(&str) -> Result<Option<T>>) -> Result<Vec<T>> {
        let mut rows = Vec::new();
        for (number, line) in Self::read_lines(path)? {
            match parse(&line) {
                Ok(Some(row)) => rows.push(row),
                Ok(None) => {}
                Err(e) => warn!(
                    "Skipping line {} of {}: {}",
                    number,
                    path.display(),
                    e.message()
                ),
            }
        }
        debug!("Loaded {} records from {}", rows.len(), path.display());
        Ok(rows)
    }

    fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content).map_err(|e| {
            AcademicError::file_operation(format!("Failed to write {}: {e}", path.display()))
        })?;
        debug!("Wrote {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}

impl Storage for TextStorage {
    fn load_students(&self) -> Result<Vec<StudentRow>> {
        Self::parse_lines(&self.students_path, |line| {
            students::parse_student(line).map(Some)
        })
    }

    fn save_students(&self, rows: &[StudentRow]) -> Result<()> {
        let lines: Vec<String> = rows.iter().map(students::format_student).collect();
        Self::write_lines(&self.students_path, &lines)
    }

    fn load_catalog(&self) -> Result<CatalogRows> {
        let entries = Self::parse_lines(&self.catalog_path, catalog::parse_catalog_line)?;
        Ok(catalog::collect_catalog(entries))
    }

    fn save_catalog(&self, rows: &CatalogRows) -> Result<()> {
        Self::write_lines(&self.catalog_path, &catalog::format_catalog(rows))
    }

    fn load_evaluations(&self) -> Result<Vec<EvaluationRow>> {
        Self::parse_lines(&self.evaluations_path, |line| {
            evaluations::parse_evaluation(line).map(Some)
        })
    }

    fn save_evaluations(&self, rows: &[EvaluationRow]) -> Result<()> {
        let lines: Vec<String> = rows.iter().map(evaluations::format_evaluation).collect();
        Self::write_lines(&self.evaluations_path, &lines)
    }
}

/// 拆分一行并检查字段数
pub(crate) fn split_fields<'a>(
    line: &'a str,
    accepted: &[usize],
    what: &str,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if !accepted.contains(&fields.len()) {
        return Err(AcademicError::parse(format!(
            "{what} record has {} fields",
            fields.len()
        )));
    }
    Ok(fields)
}

pub(crate) fn split_list(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn or_not_informed(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_INFORMED
    } else {
        value
    }
}
