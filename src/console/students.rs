use std::io::{BufRead, Write};

use super::{Console, INVALID_OPTION, non_blank};
use crate::errors::Result;
use crate::models::students::entities::StudentKind;
use crate::models::students::requests::{RegisterStudentRequest, UpdateStudentRequest};

const STUDENT_MENU: &[&str] = &[
    "1. Cadastrar Aluno",
    "2. Editar Aluno",
    "3. Listar Alunos",
    "4. Matricular em Disciplina",
    "5. Trancar Disciplina",
    "6. Trancar Semestre",
    "7. Destrancar Semestre",
    "0. Voltar",
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn student_menu(&mut self) -> Result<()> {
        loop {
            self.show_menu("Modo Aluno", STUDENT_MENU)?;
            match self.read_option()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.register_student()?,
                Some(2) => self.edit_student()?,
                Some(3) => self.list_students()?,
                Some(4) => self.enroll_student()?,
                Some(5) => self.withdraw_course()?,
                Some(6) => self.lock_semester()?,
                Some(7) => self.unlock_semester()?,
                Some(_) => writeln!(self.output, "{INVALID_OPTION}")?,
            }
        }
    }

    fn register_student(&mut self) -> Result<()> {
        self.section("Cadastrar Aluno")?;
        let name = prompt!(self.ask("Nome: "));
        let id = prompt!(self.ask("Matrícula: "));
        let course_of_study = prompt!(self.ask("Curso: "));
        let special = prompt!(self.ask_yes_no("Aluno Especial (S/N)? "));

        let request = RegisterStudentRequest {
            name,
            id,
            course_of_study,
            kind: if special {
                StudentKind::Special
            } else {
                StudentKind::Standard
            },
        };
        let outcome = self.records.students_mut().register(request).map(|_| ());
        self.finish(outcome, "Aluno cadastrado com sucesso!")
    }

    fn edit_student(&mut self) -> Result<()> {
        self.section("Editar Aluno")?;
        let id = prompt!(self.ask("Matrícula do aluno: "));
        let name = prompt!(self.ask("Novo nome (vazio para manter): "));
        let course_of_study = prompt!(self.ask("Novo curso (vazio para manter): "));

        let update = UpdateStudentRequest {
            name: non_blank(name),
            course_of_study: non_blank(course_of_study),
        };
        let outcome = self.records.students_mut().update(&id, update).map(|_| ());
        self.finish(outcome, "Aluno editado com sucesso!")
    }

    fn list_students(&mut self) -> Result<()> {
        self.section("Lista de Alunos")?;
        writeln!(
            self.output,
            "Nome                 Matrícula    Curso                Tipo"
        )?;
        writeln!(self.output, "{}", "-".repeat(66))?;
        for student in self.records.students().list() {
            writeln!(
                self.output,
                "{:<20} {:<12} {:<20} {}",
                student.name(),
                student.id(),
                student.course_of_study,
                student.kind().label()
            )?;
        }
        Ok(())
    }

    fn enroll_student(&mut self) -> Result<()> {
        self.section("Matricular em Disciplina")?;
        let student_id = prompt!(self.ask("Matrícula do aluno: "));
        let course_code = prompt!(self.ask("Código da disciplina: "));
        let class_code = prompt!(self.ask("Código da turma: "));

        let outcome = self.records.enroll(&student_id, &course_code, &class_code);
        self.finish(outcome, "Matrícula realizada com sucesso!")
    }

    fn withdraw_course(&mut self) -> Result<()> {
        self.section("Trancar Disciplina")?;
        let student_id = prompt!(self.ask("Matrícula do aluno: "));
        let course_code = prompt!(self.ask("Código da disciplina: "));

        let outcome = self.records.withdraw_course(&student_id, &course_code);
        self.finish(outcome, "Disciplina trancada com sucesso!")
    }

    fn lock_semester(&mut self) -> Result<()> {
        self.section("Trancar Semestre")?;
        let student_id = prompt!(self.ask("Matrícula do aluno: "));

        let outcome = self.records.lock_semester(&student_id);
        self.finish(outcome, "Semestre trancado com sucesso!")
    }

    fn unlock_semester(&mut self) -> Result<()> {
        self.section("Destrancar Semestre")?;
        let student_id = prompt!(self.ask("Matrícula do aluno: "));

        let outcome = self.records.unlock_semester(&student_id);
        self.finish(outcome, "Semestre destrancado com sucesso!")
    }
}
