use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use std::sync::OnceLock;

use super::{AppConfig, StorageConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，首次运行无需配置文件
            .set_default("app.system_name", "Sistema Acadêmico FCTE")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("app.log_dir", "logs")?
            .set_default("storage.data_dir", ".")?
            .set_default("storage.students_file", "alunos.txt")?
            .set_default("storage.catalog_file", "disciplinas.txt")?
            .set_default("storage.evaluations_file", "avaliacoes.txt")?
            .set_default("storage.autosave", true)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("ACADEMIC")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("storage.data_dir", std::env::var("DATA_DIR").ok())?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

impl StorageConfig {
    /// 使用给定目录和默认文件名
    pub fn in_dir<P: Into<String>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            students_file: "alunos.txt".to_string(),
            catalog_file: "disciplinas.txt".to_string(),
            evaluations_file: "avaliacoes.txt".to_string(),
            autosave: true,
        }
    }

    pub fn students_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.students_file)
    }

    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.catalog_file)
    }

    pub fn evaluations_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.evaluations_file)
    }
}
