use super::{FIELD_SEPARATOR, LIST_SEPARATOR, or_not_informed, split_fields, split_list};
use crate::errors::{AcademicError, Result};
use crate::models::evaluations::entities::EvaluationPolicy;
use crate::storage::{CatalogRows, ClassRow, CourseRow, ProfessorRow};

const SECTION_MARKER: &str = "###";
const PROFESSORS_SECTION: &str = "### PROFESSORES ###";
const COURSES_SECTION: &str = "### DISCIPLINAS ###";
const CLASSES_SECTION: &str = "### TURMAS ###";

const PROFESSOR_TAG: &str = "PROF";
const COURSE_TAG: &str = "DISC";
const CLASS_TAG: &str = "TURM";

pub enum CatalogEntry {
    Professor(ProfessorRow),
    Course(CourseRow),
    Class(ClassRow),
}

/// 解析目录文件的一行，分节标记返回 `None`
pub fn parse_catalog_line(line: &str) -> Result<Option<CatalogEntry>> {
    if line.starts_with(SECTION_MARKER) {
        return Ok(None);
    }

    let tag = line.split(FIELD_SEPARATOR).next().unwrap_or_default();
    let entry = match tag {
        PROFESSOR_TAG => {
            let f = split_fields(line, &[4], "Professor")?;
            CatalogEntry::Professor(ProfessorRow {
                name: f[1].to_string(),
                id: f[2].to_string(),
                department: f[3].to_string(),
            })
        }
        COURSE_TAG => {
            // 没有先修课程时旧文件可能省略最后一列
            let f = split_fields(line, &[4, 5], "Course")?;
            CatalogEntry::Course(CourseRow {
                name: f[1].to_string(),
                code: f[2].to_string(),
                credit_hours: f[3].trim().parse()?,
                prerequisites: f.get(4).map(|p| split_list(p)).unwrap_or_default(),
            })
        }
        CLASS_TAG => {
            let f = split_fields(line, &[9, 10], "Class")?;
            let policy: EvaluationPolicy = f[5].parse().map_err(AcademicError::parse)?;
            CatalogEntry::Class(ClassRow {
                code: f[1].to_string(),
                course_code: f[2].to_string(),
                professor_id: f[3].to_string(),
                term: f[4].to_string(),
                policy,
                in_person: f[6].trim().parse()?,
                schedule: f[7].to_string(),
                capacity: f[8].trim().parse()?,
                room: f
                    .get(9)
                    .filter(|room| !room.trim().is_empty())
                    .map(|room| room.to_string()),
            })
        }
        other => {
            return Err(AcademicError::parse(format!(
                "Unknown catalog record tag {other}"
            )));
        }
    };
    Ok(Some(entry))
}

pub fn collect_catalog(entries: Vec<CatalogEntry>) -> CatalogRows {
    let mut rows = CatalogRows::default();
    for entry in entries {
        match entry {
            CatalogEntry::Professor(p) => rows.professors.push(p),
            CatalogEntry::Course(c) => rows.courses.push(c),
            CatalogEntry::Class(c) => rows.classes.push(c),
        }
    }
    rows
}

pub fn format_catalog(rows: &CatalogRows) -> Vec<String> {
    let sep = FIELD_SEPARATOR;
    let mut lines = Vec::with_capacity(
        rows.professors.len() + rows.courses.len() + rows.classes.len() + 3,
    );

    lines.push(PROFESSORS_SECTION.to_string());
    for p in &rows.professors {
        lines.push(format!(
            "{PROFESSOR_TAG}{sep}{}{sep}{}{sep}{}",
            p.name,
            p.id,
            or_not_informed(&p.department)
        ));
    }

    lines.push(COURSES_SECTION.to_string());
    for c in &rows.courses {
        lines.push(format!(
            "{COURSE_TAG}{sep}{}{sep}{}{sep}{}{sep}{}",
            c.name,
            c.code,
            c.credit_hours,
            c.prerequisites.join(&LIST_SEPARATOR.to_string())
        ));
    }

    lines.push(CLASSES_SECTION.to_string());
    for c in &rows.classes {
        lines.push(format!(
            "{CLASS_TAG}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            c.code,
            c.course_code,
            c.professor_id,
            c.term,
            c.policy,
            c.in_person,
            c.schedule,
            c.capacity,
            c.room.as_deref().unwrap_or_default()
        ));
    }
    lines
}
