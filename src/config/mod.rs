use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `reset_password`.
pub const RESET_PASSWORD_ENV: &str = "RDELAYLOGGER_RESET_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_reset_password")]
    pub reset_password: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_reset_password() -> String {
    "your_password_here".to_string()
}
fn default_bind_address() -> String {
    "0.0.0.0:5000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            reset_password: default_reset_password(),
            bind_address: default_bind_address(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdelaylogger")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rdelaylogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdelaylogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdelaylogger.sqlite")
    }

    /// Load configuration from the standard file, or return defaults if not found.
    /// Environment overrides are applied on top.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Load configuration from an explicit path (defaults when missing).
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        if let Ok(pw) = env::var(RESET_PASSWORD_ENV)
            && !pw.is_empty()
        {
            self.reset_password = pw;
        }
    }

    /// YAML rendering with the reset secret masked, for display.
    pub fn to_masked_yaml(&self) -> AppResult<String> {
        let mut shown = self.clone();
        shown.reset_password = "********".to_string();
        serde_yaml::to_string(&shown).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    /// Returns the path of the configured database.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            expand_tilde(&name)
        } else {
            Self::database_file()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
