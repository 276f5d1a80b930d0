use tracing::{error, warn};

use crate::services::AcademicRecords;
use crate::storage::Storage;

/// 退出前保存全部数据，任一文件保存失败时返回 false
pub fn persist_all(records: &AcademicRecords, storage: &dyn Storage) -> bool {
    let results = [
        ("students", records.save_students(storage)),
        ("catalog", records.save_catalog(storage)),
        ("evaluations", records.save_evaluations(storage)),
    ];

    let mut ok = true;
    for (what, result) in results {
        if let Err(e) = result {
            error!("Failed to save {}: {}", what, e);
            ok = false;
        }
    }
    if ok {
        warn!("All records saved, shutting down");
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::services::tests::sample_records;
    use crate::storage::text_storage::TextStorage;
    use tempfile::TempDir;

    #[test]
    fn test_persist_all_writes_three_files() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig::in_dir(dir.path().to_string_lossy().to_string());
        let storage = TextStorage::new(&config).unwrap();

        assert!(persist_all(&sample_records(), &storage));
        assert!(config.students_path().exists());
        assert!(config.catalog_path().exists());
        assert!(config.evaluations_path().exists());
    }

    #[test]
    fn test_persist_all_reports_failure() {
        let dir = TempDir::new().unwrap();
        let mut config = StorageConfig::in_dir(dir.path().to_string_lossy().to_string());
        // 目标是一个目录，写入必然失败
        config.students_file = String::new();
        let storage = TextStorage::new(&config).unwrap();

        assert!(!persist_all(&sample_records(), &storage));
        assert!(config.catalog_path().exists());
    }
}
