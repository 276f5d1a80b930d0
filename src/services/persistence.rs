//! 学籍数据与存储记录之间的转换
//!
//! 加载时按正常的登记流程重放每条记录（先目录、再学生、最后成绩），
//! 无法重放的记录记录警告后跳过。

use tracing::{info, warn};

use crate::errors::Result;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::professors::requests::RegisterProfessorRequest;
use crate::models::students::requests::RegisterStudentRequest;
use crate::services::AcademicRecords;
use crate::storage::{
    CatalogRows, ClassRow, CourseRow, EvaluationRow, ProfessorRow, Storage, StudentRow,
};
use crate::utils::validate_attendance;

impl AcademicRecords {
    /// 从存储加载全部数据
    pub fn load(storage: &dyn Storage) -> Result<Self> {
        let mut records = Self::new();
        records.restore_catalog(storage.load_catalog()?);
        records.restore_students(storage.load_students()?);
        records.restore_evaluations(storage.load_evaluations()?);
        records.drop_unbacked_courses();

        info!(
            "Loaded {} students, {} courses, {} classes",
            records.students.len(),
            records.catalog.list_courses().len(),
            records.catalog.list_classes().len()
        );
        Ok(records)
    }

    pub fn save_students(&self, storage: &dyn Storage) -> Result<()> {
        storage.save_students(&self.student_rows())
    }

    pub fn save_catalog(&self, storage: &dyn Storage) -> Result<()> {
        storage.save_catalog(&self.catalog_rows())
    }

    pub fn save_evaluations(&self, storage: &dyn Storage) -> Result<()> {
        storage.save_evaluations(&self.evaluation_rows())
    }

    pub fn save_all(&self, storage: &dyn Storage) -> Result<()> {
        self.save_students(storage)?;
        self.save_catalog(storage)?;
        self.save_evaluations(storage)
    }

    pub fn student_rows(&self) -> Vec<StudentRow> {
        self.students
            .list()
            .into_iter()
            .map(|s| StudentRow {
                kind: s.kind(),
                name: s.name().to_string(),
                id: s.id().to_string(),
                course_of_study: s.course_of_study.clone(),
                semester_locked: s.is_semester_locked(),
                enrolled_courses: s.enrolled_courses().to_vec(),
            })
            .collect()
    }

    pub fn catalog_rows(&self) -> CatalogRows {
        CatalogRows {
            professors: self
                .catalog
                .list_professors()
                .into_iter()
                .map(|p| ProfessorRow {
                    name: p.name().to_string(),
                    id: p.id().to_string(),
                    department: p.department.clone(),
                })
                .collect(),
            courses: self
                .catalog
                .list_courses()
                .into_iter()
                .map(|c| CourseRow {
                    name: c.name.clone(),
                    code: c.code().to_string(),
                    credit_hours: c.credit_hours,
                    prerequisites: c.prerequisites().to_vec(),
                })
                .collect(),
            classes: self
                .catalog
                .list_classes()
                .into_iter()
                .map(|c| ClassRow {
                    code: c.code().to_string(),
                    course_code: c.course_code().to_string(),
                    professor_id: c.professor_id().to_string(),
                    term: c.term().to_string(),
                    policy: c.policy(),
                    in_person: c.is_in_person(),
                    schedule: c.schedule().to_string(),
                    capacity: c.capacity(),
                    room: c.room().map(str::to_string),
                })
                .collect(),
        }
    }

    /// 每个教学班按名单顺序输出，名单中的每个学生恰好一行
    pub fn evaluation_rows(&self) -> Vec<EvaluationRow> {
        let mut rows = Vec::new();
        for class in self.catalog.list_classes() {
            for student_id in class.roster() {
                if let Some(card) = class.score_card(student_id) {
                    rows.push(EvaluationRow {
                        class_code: class.code().to_string(),
                        student_id: student_id.clone(),
                        scores: *card.scores(),
                        classes_held: card.classes_held(),
                        classes_attended: card.classes_attended(),
                    });
                }
            }
        }
        rows
    }

    fn restore_catalog(&mut self, rows: CatalogRows) {
        for p in rows.professors {
            let id = p.id.clone();
            let request = RegisterProfessorRequest {
                name: p.name,
                id: p.id,
                department: p.department,
            };
            if let Err(e) = self.catalog.register_professor(request) {
                warn!("Skipping stored professor {}: {}", id, e.message());
            }
        }

        let mut prerequisites = Vec::new();
        for c in rows.courses {
            let request = CreateCourseRequest {
                name: c.name,
                code: c.code.clone(),
                credit_hours: c.credit_hours,
            };
            match self.catalog.register_course(request) {
                Ok(()) => prerequisites.push((c.code, c.prerequisites)),
                Err(e) => warn!("Skipping stored course {}: {}", c.code, e.message()),
            }
        }
        // 所有课程就绪后再关联先修课程，允许文件中向后引用
        for (code, prereqs) in prerequisites {
            for prereq in prereqs {
                if let Err(e) = self.catalog.add_prerequisite(&code, &prereq) {
                    warn!(
                        "Skipping prerequisite {} of course {}: {}",
                        prereq,
                        code,
                        e.message()
                    );
                }
            }
        }

        for c in rows.classes {
            let code = c.code.clone();
            let request = CreateClassRequest {
                code: c.code,
                course_code: c.course_code,
                professor_id: c.professor_id,
                term: c.term,
                policy: c.policy,
                in_person: c.in_person,
                schedule: c.schedule,
                capacity: c.capacity,
                room: c.room,
            };
            if let Err(e) = self.catalog.create_class(request) {
                warn!("Skipping stored class {}: {}", code, e.message());
            }
        }
    }

    fn restore_students(&mut self, rows: Vec<StudentRow>) {
        for row in rows {
            let id = row.id.clone();
            let request = RegisterStudentRequest {
                name: row.name,
                id: row.id,
                course_of_study: row.course_of_study,
                kind: row.kind,
            };
            if let Err(e) = self.students.register(request) {
                warn!("Skipping stored student {}: {}", id, e.message());
                continue;
            }
            let Some(student) = self.students.get_mut(&id) else {
                continue;
            };

            if row.semester_locked {
                student.lock_semester();
                continue;
            }
            for code in row.enrolled_courses {
                if self.catalog.get_course(&code).is_none() {
                    warn!("Student {} references unknown course {}", id, code);
                    continue;
                }
                student.restore_course(code);
            }
        }
    }

    fn restore_evaluations(&mut self, rows: Vec<EvaluationRow>) {
        for row in rows {
            if let Err(e) = row
                .scores
                .validate()
                .and_then(|()| restore_attendance_check(&row))
            {
                warn!(
                    "Skipping evaluation of {} in {}: {}",
                    row.student_id,
                    row.class_code,
                    e.message()
                );
                continue;
            }

            let Some(student) = self.students.get_mut(&row.student_id) else {
                warn!("Evaluation references unknown student {}", row.student_id);
                continue;
            };
            let Some(class) = self.catalog.get_class_mut(&row.class_code) else {
                warn!("Evaluation references unknown class {}", row.class_code);
                continue;
            };
            if student.is_semester_locked() {
                warn!(
                    "Student {} has a locked semester, dropping class {}",
                    row.student_id, row.class_code
                );
                continue;
            }

            // 名单只保存在成绩文件中，这里按行恢复
            if !class.contains(&row.student_id) && !class.enroll_student(student) {
                warn!(
                    "Class {} rejected stored student {}",
                    row.class_code, row.student_id
                );
                continue;
            }
            student.restore_course(class.course_code());
            class.restore_score_card(
                &row.student_id,
                row.scores,
                row.classes_held,
                row.classes_attended,
            );
        }
    }

    // 已选课程必须能在该课程的某个教学班名单中找到
    fn drop_unbacked_courses(&mut self) {
        let catalog = &self.catalog;
        for student in self.students.students_mut() {
            let unbacked: Vec<String> = student
                .enrolled_courses()
                .iter()
                .filter(|code| {
                    !catalog
                        .classes_of_course(code)
                        .iter()
                        .any(|class| class.contains(student.id()))
                })
                .cloned()
                .collect();
            for code in unbacked {
                warn!(
                    "Student {} has no class roster for course {}, dropping it",
                    student.id(),
                    code
                );
                student.withdraw(&code);
            }
        }
    }
}

// 尚未登记出勤的记录两项均为 0
fn restore_attendance_check(row: &EvaluationRow) -> Result<()> {
    if row.classes_held == 0 && row.classes_attended == 0 {
        return Ok(());
    }
    validate_attendance(i64::from(row.classes_held), i64::from(row.classes_attended))
}
