use tracing::info;

use crate::errors::{AcademicError, Result};
use crate::services::AcademicRecords;

/// 锁定学期：退出所有教学班并清空已选课程
pub fn lock_semester(records: &mut AcademicRecords, student_id: &str) -> Result<()> {
    let student = records
        .students
        .get_mut(student_id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {student_id} not found")))?;

    for class in records.catalog.classes_mut() {
        class.withdraw_student(student_id);
    }
    student.lock_semester();

    info!("Locked semester for student {}", student_id);
    Ok(())
}

pub fn unlock_semester(records: &mut AcademicRecords, student_id: &str) -> Result<()> {
    let student = records
        .students
        .get_mut(student_id)
        .ok_or_else(|| AcademicError::not_found(format!("Student {student_id} not found")))?;
    student.unlock_semester();

    info!("Unlocked semester for student {}", student_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::services::tests::sample_records;

    #[test]
    fn test_lock_clears_enrollments_and_rosters() {
        let mut records = sample_records();
        records.enroll("A1", "CALC1", "CALC1-2024-1").unwrap();
        records.lock_semester("A1").unwrap();

        let student = records.students().get("A1").unwrap();
        assert!(student.is_semester_locked());
        assert!(student.enrolled_courses().is_empty());
        assert!(
            !records
                .catalog()
                .get_class("CALC1-2024-1")
                .unwrap()
                .contains("A1")
        );

        assert_eq!(
            records.enroll("A1", "FIS1", "FIS1-2024-1").unwrap_err().code(),
            "E003"
        );
    }

    #[test]
    fn test_unlock_does_not_restore() {
        let mut records = sample_records();
        records.enroll("A1", "CALC1", "CALC1-2024-1").unwrap();
        records.lock_semester("A1").unwrap();
        records.unlock_semester("A1").unwrap();

        let student = records.students().get("A1").unwrap();
        assert!(!student.is_semester_locked());
        assert!(student.enrolled_courses().is_empty());

        records.enroll("A1", "CALC1", "CALC1-2024-1").unwrap();
    }

    #[test]
    fn test_unknown_student() {
        let mut records = sample_records();
        assert_eq!(records.lock_semester("ZZ").unwrap_err().code(), "E002");
        assert_eq!(records.unlock_semester("ZZ").unwrap_err().code(), "E002");
    }
}
