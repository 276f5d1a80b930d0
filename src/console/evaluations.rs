use std::io::{BufRead, Write};

use super::{Console, INVALID_OPTION};
use crate::errors::Result;
use crate::models::evaluations::entities::{MINIMUM_ATTENDANCE, Scores, round_one_decimal};

const EVALUATION_MENU: &[&str] = &[
    "1. Lançar Notas",
    "2. Lançar Frequência",
    "3. Relatório por Turma",
    "4. Relatório por Disciplina",
    "5. Relatório por Professor",
    "6. Boletim do Aluno",
    "0. Voltar",
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn evaluation_menu(&mut self) -> Result<()> {
        loop {
            self.show_menu("Modo Avaliação/Frequência", EVALUATION_MENU)?;
            match self.read_option()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.record_grades()?,
                Some(2) => self.record_attendance()?,
                Some(3) => self.class_report()?,
                Some(4) => self.course_report()?,
                Some(5) => self.professor_report()?,
                Some(6) => self.student_transcript()?,
                Some(_) => writeln!(self.output, "{INVALID_OPTION}")?,
            }
        }
    }

    /// 显示教学班概况与名单，教学班不存在时返回 false
    fn show_class(&mut self, class_code: &str, with_policy: bool) -> Result<bool> {
        let catalog = self.records.catalog();
        let Some(class) = catalog.get_class(class_code) else {
            writeln!(self.output, "Erro: Turma não encontrada!")?;
            return Ok(false);
        };

        let course = catalog
            .get_course(class.course_code())
            .map_or(class.course_code(), |c| c.name.as_str());
        let professor = catalog
            .get_professor(class.professor_id())
            .map_or(class.professor_id(), |p| p.name());
        writeln!(self.output, "\nDisciplina: {course}")?;
        writeln!(self.output, "Professor: {professor}")?;
        if with_policy {
            writeln!(self.output, "Forma de Avaliação: {}", class.policy().label())?;
        }
        writeln!(self.output, "\nAlunos matriculados:")?;
        for student_id in class.roster() {
            let name = self
                .records
                .students()
                .get(student_id)
                .map_or("", |s| s.name());
            writeln!(self.output, "- {name} ({student_id})")?;
        }
        Ok(true)
    }

    /// 确认学生在教学班名单中
    fn check_roster(&mut self, class_code: &str, student_id: &str) -> Result<bool> {
        if self.records.students().get(student_id).is_none() {
            writeln!(self.output, "Erro: Aluno não encontrado!")?;
            return Ok(false);
        }
        let enrolled = self
            .records
            .catalog()
            .get_class(class_code)
            .is_some_and(|class| class.contains(student_id));
        if !enrolled {
            writeln!(self.output, "Erro: Aluno não está matriculado nesta turma!")?;
        }
        Ok(enrolled)
    }

    fn record_grades(&mut self) -> Result<()> {
        self.section("Lançar Notas")?;
        let class_code = prompt!(self.ask("Código da turma: "));
        if !self.show_class(&class_code, true)? {
            return Ok(());
        }

        let student_id = prompt!(self.ask("\nMatrícula do aluno: "));
        if !self.check_roster(&class_code, &student_id)? {
            return Ok(());
        }
        let receives_grades = self
            .records
            .students()
            .get(&student_id)
            .is_some_and(|s| s.receives_grades());
        if !receives_grades {
            writeln!(self.output, "Erro: Alunos especiais não recebem notas!")?;
            return Ok(());
        }

        let p1 = prompt!(self.ask_number::<f64>("Nota P1 (0-10): "));
        let p2 = prompt!(self.ask_number::<f64>("Nota P2 (0-10): "));
        let p3 = prompt!(self.ask_number::<f64>("Nota P3 (0-10): "));
        let exercises = prompt!(self.ask_number::<f64>("Nota Listas (0-10): "));
        let seminar = prompt!(self.ask_number::<f64>("Nota Seminário (0-10): "));

        match self
            .records
            .record_grades(&class_code, &student_id, Scores::new(p1, p2, p3, exercises, seminar))
        {
            Ok(true) => {
                writeln!(self.output, "\nNotas lançadas com sucesso!")?;
                writeln!(
                    self.output,
                    "Notas: P1={:.1}, P2={:.1}, P3={:.1}, Listas={:.1}, Seminário={:.1}",
                    round_one_decimal(p1),
                    round_one_decimal(p2),
                    round_one_decimal(p3),
                    round_one_decimal(exercises),
                    round_one_decimal(seminar)
                )?;
                self.autosave()
            }
            Ok(false) => {
                writeln!(self.output, "Erro: Alunos especiais não recebem notas!")?;
                Ok(())
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn record_attendance(&mut self) -> Result<()> {
        self.section("Lançar Frequência")?;
        let class_code = prompt!(self.ask("Código da turma: "));
        if !self.show_class(&class_code, false)? {
            return Ok(());
        }

        let student_id = prompt!(self.ask("\nMatrícula do aluno: "));
        if !self.check_roster(&class_code, &student_id)? {
            return Ok(());
        }

        let held = prompt!(self.ask_number::<i64>("Total de aulas ministradas: "));
        let attended = prompt!(self.ask_number::<i64>("Número de presenças: "));

        match self
            .records
            .record_attendance(&class_code, &student_id, held, attended)
        {
            Ok(_) => {
                let percentage = attended as f64 * 100.0 / held as f64;
                writeln!(self.output, "\nFrequência lançada com sucesso!")?;
                writeln!(
                    self.output,
                    "Frequência: {attended} de {held} aulas ({:.1}%)",
                    round_one_decimal(percentage)
                )?;
                if percentage < MINIMUM_ATTENDANCE {
                    writeln!(
                        self.output,
                        "ATENÇÃO: Frequência abaixo de {MINIMUM_ATTENDANCE}% - Risco de reprovação por falta!"
                    )?;
                }
                self.autosave()
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn class_report(&mut self) -> Result<()> {
        self.section("Relatório por Turma")?;
        let class_code = prompt!(self.ask("Código da turma: "));
        let report = self.records.class_report(&class_code);
        writeln!(self.output, "{report}")?;
        Ok(())
    }

    fn course_report(&mut self) -> Result<()> {
        self.section("Relatório por Disciplina")?;
        let course_code = prompt!(self.ask("Código da disciplina: "));
        let report = self.records.course_report(&course_code);
        writeln!(self.output, "{report}")?;
        Ok(())
    }

    fn professor_report(&mut self) -> Result<()> {
        self.section("Relatório por Professor")?;
        let professor_id = prompt!(self.ask("Matrícula do professor: "));
        let report = self.records.professor_report(&professor_id);
        writeln!(self.output, "{report}")?;
        Ok(())
    }

    fn student_transcript(&mut self) -> Result<()> {
        self.section("Boletim do Aluno")?;
        let student_id = prompt!(self.ask("Matrícula do aluno: "));
        let term = prompt!(self.ask("Semestre (ex: 2024.1): "));
        let include_class_data = prompt!(self.ask_yes_no("Incluir dados da turma (S/N)? "));

        let transcript = self
            .records
            .student_transcript(&student_id, &term, include_class_data);
        writeln!(self.output, "{transcript}")?;
        Ok(())
    }
}
