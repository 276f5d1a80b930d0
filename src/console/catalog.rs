use std::io::{BufRead, Write};

use super::{Console, INVALID_OPTION};
use crate::errors::Result;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::evaluations::entities::EvaluationPolicy;
use crate::models::professors::requests::RegisterProfessorRequest;

const CATALOG_MENU: &[&str] = &[
    "1. Cadastrar Disciplina",
    "2. Adicionar Pré-requisito",
    "3. Criar Turma",
    "4. Definir Sala",
    "5. Listar Disciplinas",
    "6. Listar Turmas",
    "7. Cadastrar Professor",
    "8. Listar Professores",
    "0. Voltar",
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn catalog_menu(&mut self) -> Result<()> {
        loop {
            self.show_menu("Modo Disciplina/Turma", CATALOG_MENU)?;
            match self.read_option()? {
                None | Some(0) => return Ok(()),
                Some(1) => self.register_course()?,
                Some(2) => self.add_prerequisite()?,
                Some(3) => self.create_class()?,
                Some(4) => self.set_room()?,
                Some(5) => self.list_courses()?,
                Some(6) => self.list_classes()?,
                Some(7) => self.register_professor()?,
                Some(8) => self.list_professors()?,
                Some(_) => writeln!(self.output, "{INVALID_OPTION}")?,
            }
        }
    }

    fn register_course(&mut self) -> Result<()> {
        self.section("Cadastrar Disciplina")?;
        let name = prompt!(self.ask("Nome: "));
        let code = prompt!(self.ask("Código: "));
        let credit_hours = prompt!(self.ask_number::<u32>("Carga horária: "));

        let outcome = self.records.catalog_mut().register_course(CreateCourseRequest {
            name,
            code,
            credit_hours,
        });
        self.finish(outcome, "Disciplina cadastrada com sucesso!")
    }

    fn add_prerequisite(&mut self) -> Result<()> {
        self.section("Adicionar Pré-requisito")?;
        let course_code = prompt!(self.ask("Código da disciplina: "));
        let prerequisite = prompt!(self.ask("Código do pré-requisito: "));

        let outcome = self
            .records
            .catalog_mut()
            .add_prerequisite(&course_code, &prerequisite);
        self.finish(outcome, "Pré-requisito adicionado com sucesso!")
    }

    fn create_class(&mut self) -> Result<()> {
        self.section("Criar Turma")?;
        let code = prompt!(self.ask("Código da turma: "));
        let course_code = prompt!(self.ask("Código da disciplina: "));
        let professor_id = prompt!(self.ask("Matrícula do professor: "));
        let term = prompt!(self.ask("Semestre (ex: 2024.1): "));
        let policy = prompt!(
            self.ask_number::<u32>("Forma de avaliação (1-Média Simples, 2-Média Ponderada): ")
        );
        let in_person = prompt!(self.ask_yes_no("Presencial (S/N)? "));
        let room = if in_person {
            super::non_blank(prompt!(self.ask("Sala (opcional): ")))
        } else {
            None
        };
        let schedule = prompt!(self.ask("Horário (ex: SEG 14:00-15:40): "));
        let capacity = prompt!(self.ask_number::<u32>("Capacidade máxima: "));

        let request = CreateClassRequest {
            code,
            course_code,
            professor_id,
            term,
            policy: if policy == 1 {
                EvaluationPolicy::Simple
            } else {
                EvaluationPolicy::Weighted
            },
            in_person,
            schedule,
            capacity,
            room,
        };
        let outcome = self.records.catalog_mut().create_class(request);
        self.finish(outcome, "Turma criada com sucesso!")
    }

    fn set_room(&mut self) -> Result<()> {
        self.section("Definir Sala")?;
        let class_code = prompt!(self.ask("Código da turma: "));
        let room = prompt!(self.ask("Sala: "));

        let outcome = self.records.catalog_mut().set_room(&class_code, &room);
        self.finish(outcome, "Sala definida com sucesso!")
    }

    fn list_courses(&mut self) -> Result<()> {
        self.section("Lista de Disciplinas")?;
        writeln!(
            self.output,
            "Código    Nome                           Carga Horária"
        )?;
        writeln!(self.output, "{}", "-".repeat(53))?;
        for course in self.records.catalog().list_courses() {
            let prerequisites = if course.prerequisites().is_empty() {
                String::new()
            } else {
                format!(" (pré-requisitos: {})", course.prerequisites().join(", "))
            };
            writeln!(
                self.output,
                "{:<9} {:<30} {:>3} horas{}",
                course.code(),
                course.name,
                course.credit_hours,
                prerequisites
            )?;
        }
        Ok(())
    }

    fn list_classes(&mut self) -> Result<()> {
        self.section("Lista de Turmas")?;
        writeln!(
            self.output,
            "Código       Disciplina                   Professor          Alunos"
        )?;
        writeln!(self.output, "{}", "-".repeat(66))?;
        let catalog = self.records.catalog();
        for class in catalog.list_classes() {
            let course = catalog
                .get_course(class.course_code())
                .map_or(class.course_code(), |c| c.name.as_str());
            let professor = catalog
                .get_professor(class.professor_id())
                .map_or(class.professor_id(), |p| p.name());
            writeln!(
                self.output,
                "{:<12} {:<28} {:<18} {}/{}",
                class.code(),
                course,
                professor,
                class.enrolled_count(),
                class.capacity()
            )?;
        }
        Ok(())
    }

    fn register_professor(&mut self) -> Result<()> {
        self.section("Cadastrar Professor")?;
        let name = prompt!(self.ask("Nome: "));
        let id = prompt!(self.ask("Matrícula: "));
        let department = prompt!(self.ask("Departamento: "));

        let outcome = self
            .records
            .catalog_mut()
            .register_professor(RegisterProfessorRequest {
                name,
                id,
                department,
            });
        self.finish(outcome, "Professor cadastrado com sucesso!")
    }

    fn list_professors(&mut self) -> Result<()> {
        self.section("Lista de Professores")?;
        writeln!(self.output, "Nome                 Matrícula    Departamento")?;
        writeln!(self.output, "{}", "-".repeat(51))?;
        for professor in self.records.catalog().list_professors() {
            writeln!(
                self.output,
                "{:<20} {:<12} {:<20}",
                professor.name(),
                professor.id(),
                professor.department
            )?;
        }
        Ok(())
    }
}
