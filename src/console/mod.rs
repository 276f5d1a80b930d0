//! 交互式控制台
//!
//! 编号菜单驱动，输入输出可以是任意 `BufRead`/`Write`，便于脚本化测试。
//! 输入流结束等同于选择“退出”。

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, error};

use crate::errors::{AcademicError, Result};
use crate::services::AcademicRecords;
use crate::storage::Storage;

/// 读取一项输入，输入流结束时直接结束当前操作
macro_rules! prompt {
    ($value:expr) => {
        match $value? {
            Some(value) => value,
            None => return Ok(()),
        }
    };
}

mod catalog;
mod evaluations;
mod students;

const DEFAULT_TITLE: &str = "Sistema Acadêmico FCTE";
const INVALID_OPTION: &str = "Opção inválida!";

const MAIN_MENU: &[&str] = &[
    "1. Modo Aluno",
    "2. Modo Disciplina/Turma",
    "3. Modo Avaliação/Frequência",
    "0. Sair",
];

pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    records: AcademicRecords,
    storage: Arc<dyn Storage>,
    title: String,
    autosave: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, records: AcademicRecords, storage: Arc<dyn Storage>) -> Self {
        Self {
            input,
            output,
            records,
            storage,
            title: DEFAULT_TITLE.to_string(),
            autosave: true,
        }
    }

    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }

    pub fn records(&self) -> &AcademicRecords {
        &self.records
    }

    pub fn into_records(self) -> AcademicRecords {
        self.records
    }

    /// 主菜单循环，选择退出或输入结束时返回
    pub fn run(&mut self) -> Result<()> {
        loop {
            let title = self.title.clone();
            self.show_menu(&title, MAIN_MENU)?;
            match self.read_option()? {
                None | Some(0) => break,
                Some(1) => self.student_menu()?,
                Some(2) => self.catalog_menu()?,
                Some(3) => self.evaluation_menu()?,
                Some(_) => writeln!(self.output, "{INVALID_OPTION}")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self, title: &str, items: &[&str]) -> Result<()> {
        writeln!(self.output, "\n=== {title} ===")?;
        for item in items {
            writeln!(self.output, "{item}")?;
        }
        write!(self.output, "Escolha uma opção: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// 读取菜单选项，无法解析时返回 -1
    fn read_option(&mut self) -> Result<Option<i64>> {
        Ok(self
            .read_line()?
            .map(|line| line.parse::<i64>().unwrap_or(-1)))
    }

    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// 读取数字，格式错误时重新提示
    fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        loop {
            let Some(value) = self.ask(label)? else {
                return Ok(None);
            };
            match value.parse() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => writeln!(self.output, "Erro: Digite apenas números!")?,
            }
        }
    }

    fn ask_yes_no(&mut self, label: &str) -> Result<Option<bool>> {
        Ok(self.ask(label)?.map(|answer| answer.eq_ignore_ascii_case("s")))
    }

    fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "\n=== {title} ===")?;
        Ok(())
    }

    fn report_error(&mut self, err: &AcademicError) -> Result<()> {
        debug!("Console action failed: {}", err);
        writeln!(self.output, "Erro: {}", err.message())?;
        Ok(())
    }

    /// 输出操作结果，成功时按配置自动保存
    fn finish(&mut self, outcome: Result<()>, success: &str) -> Result<()> {
        match outcome {
            Ok(()) => {
                writeln!(self.output, "{success}")?;
                self.autosave()
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn autosave(&mut self) -> Result<()> {
        if !self.autosave {
            return Ok(());
        }
        if let Err(e) = self.records.save_all(self.storage.as_ref()) {
            error!("Autosave failed: {}", e);
            self.report_error(&e)?;
        }
        Ok(())
    }
}

/// 空输入视为“不修改”
fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::storage::text_storage::TextStorage;
    use tempfile::TempDir;

    fn run_script(dir: &TempDir, script: &str) -> (AcademicRecords, String) {
        let config = StorageConfig::in_dir(dir.path().to_string_lossy().to_string());
        let storage: Arc<dyn Storage> = Arc::new(TextStorage::new(&config).unwrap());
        let mut output = Vec::new();

        let mut console = Console::new(
            script.as_bytes(),
            &mut output,
            AcademicRecords::new(),
            storage,
        );
        console.run().unwrap();
        let records = console.into_records();
        (records, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_scripted_session() {
        let dir = TempDir::new().unwrap();
        let script = [
            // 课程、教师、教学班
            "2",
            "7", "Maria Souza", "P01", "Matemática",
            "1", "Cálculo 1", "CALC1", "60",
            "3", "CALC1-2024-1", "CALC1", "P01", "2024.1", "2", "S", "S1",
            "SEG 08:00", "2",
            "0",
            // 学生与选课
            "1",
            "1", "Ana Lima", "A1", "Engenharia", "N",
            "4", "A1", "CALC1", "CALC1-2024-1",
            "0",
            // 成绩、出勤、报表
            "3",
            "1", "CALC1-2024-1", "A1", "8", "7", "9", "8.5", "9",
            "2", "CALC1-2024-1", "A1", "60", "54",
            "3", "CALC1-2024-1",
            "0",
            "0",
        ]
        .join("\n");

        let (records, output) = run_script(&dir, &script);

        assert!(output.contains("Professor cadastrado com sucesso!"));
        assert!(output.contains("Turma criada com sucesso!"));
        assert!(output.contains("Matrícula realizada com sucesso!"));
        assert!(output.contains("Notas lançadas com sucesso!"));
        assert!(output.contains("Frequência: 54 de 60 aulas (90.0%)"));
        assert!(output.contains("Média Final: 8.3, Frequência: 90.0%, Situação: Aprovado"));

        let class = records.catalog().get_class("CALC1-2024-1").unwrap();
        assert_eq!(class.room(), Some("S1"));
        assert_eq!(class.roster(), &["A1".to_string()]);

        // 自动保存
        let saved = std::fs::read_to_string(dir.path().join("avaliacoes.txt")).unwrap();
        assert_eq!(saved, "CALC1-2024-1;A1;8;7;9;8.5;9;60;54\n");
    }

    #[test]
    fn test_tied_values_round_up_in_output() {
        let dir = TempDir::new().unwrap();
        let script = [
            "2",
            "7", "Maria Souza", "P01", "Matemática",
            "1", "Cálculo 1", "CALC1", "60",
            "3", "CALC1-2024-1", "CALC1", "P01", "2024.1", "2", "N",
            "SEG 08:00", "10",
            "0",
            "1",
            "1", "Ana Lima", "A1", "Engenharia", "N",
            "4", "A1", "CALC1", "CALC1-2024-1",
            "0",
            "3",
            "1", "CALC1-2024-1", "A1", "6", "6", "6", "8.25", "5.75",
            "2", "CALC1-2024-1", "A1", "8", "1",
            "2", "CALC1-2024-1", "A1", "8", "7",
            "3", "CALC1-2024-1",
            "0",
            "0",
        ]
        .join("\n");

        let (_, output) = run_script(&dir, &script);

        assert!(output.contains("Listas=8.3, Seminário=5.8"));
        assert!(output.contains("Frequência: 1 de 8 aulas (12.5%)"));
        assert!(output.contains("Frequência: 7 de 8 aulas (87.5%)"));
        assert!(output.contains("Média Final: 6.3, Frequência: 87.5%, Situação: Aprovado"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let dir = TempDir::new().unwrap();
        let script = ["x", "9", "2", "1", "Cálculo 1", "CALC1", "sessenta", "60", "1", "Outro", "CALC1", "30"].join("\n");

        let (records, output) = run_script(&dir, &script);

        assert_eq!(output.matches(INVALID_OPTION).count(), 2);
        assert!(output.contains("Erro: Digite apenas números!"));
        assert!(output.contains("Disciplina cadastrada com sucesso!"));
        assert!(output.contains("Erro: A course with code CALC1 already exists"));
        assert_eq!(records.catalog().get_course("CALC1").unwrap().credit_hours, 60);
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = TempDir::new().unwrap();
        let (records, output) = run_script(&dir, "1\n1\nAna");
        assert!(output.contains("=== Modo Aluno ==="));
        assert!(records.students().is_empty());
    }
}
