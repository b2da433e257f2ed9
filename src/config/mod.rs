use crate::core::calculator::PayPolicy;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the attendance history is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `attendance` tables inside the SQLite database.
    #[default]
    Sqlite,
    /// A single JSON file (`attendanceRecords` layout).
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub storage: StorageBackend,
    #[serde(default = "default_history_file")]
    pub history_file: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// LWP days tolerated each month before salary is deducted.
    #[serde(default = "default_allowed_lwp")]
    pub allowed_lwp: Decimal,
    /// Output directory for exports given without `--file`.
    #[serde(default)]
    pub export_dir: Option<String>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_history_file() -> String {
    Config::config_dir()
        .join("attendanceRecords.json")
        .to_string_lossy()
        .to_string()
}
fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_allowed_lwp() -> Decimal {
    PayPolicy::default().allowed_lwp
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            storage: StorageBackend::default(),
            history_file: default_history_file(),
            currency_symbol: default_currency_symbol(),
            allowed_lwp: default_allowed_lwp(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rattendance.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// `--db` value as a path: absolute paths are kept, relative ones live
    /// in the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn pay_policy(&self) -> PayPolicy {
        PayPolicy::new(self.allowed_lwp)
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()?
        };
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
