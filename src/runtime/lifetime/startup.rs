use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::AcademicRecords;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub records: AcademicRecords,
}

/// 准备启动上下文
/// 包括存储后端与已保存的学籍数据
pub fn prepare_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = crate::storage::create_storage(&config.storage)?;
    warn!("Storage backend initialized in {}", config.storage.data_dir);

    let records = AcademicRecords::load(storage.as_ref())?;
    debug!(
        "Restored {} students and {} classes",
        records.students().len(),
        records.catalog().list_classes().len()
    );

    Ok(StartupContext { storage, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppSettings, StorageConfig};
    use tempfile::TempDir;

    #[test]
    fn test_first_run_starts_empty() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            app: AppSettings {
                system_name: "Sistema Acadêmico FCTE".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
                log_dir: "logs".to_string(),
            },
            storage: StorageConfig::in_dir(dir.path().to_string_lossy().to_string()),
        };

        let startup = prepare_startup(&config).unwrap();
        assert!(startup.records.students().is_empty());
        assert!(startup.records.catalog().list_courses().is_empty());
    }
}
