use crate::errors::{AppError, AppResult};
use crate::models::locale::Locale;
use crate::models::status::StatusScope;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const APP_DIR: &str = ".rattendance";
const CONFIG_FILE: &str = "rattendance.conf";
const DATABASE_FILE: &str = "rattendance.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Language of report headers and labels.
    #[serde(default)]
    pub locale: Locale,
    /// Events feeding the status column of exports.
    #[serde(default)]
    pub report_status_scope: StatusScope,
    /// Answer "already clocked in" with 409 instead of the legacy 410.
    #[serde(default)]
    pub strict_conflict_status: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    pub fn with_database(database: String) -> Self {
        Self {
            database,
            host: default_host(),
            port: default_port(),
            locale: Locale::default(),
            report_status_scope: StatusScope::default(),
            strict_conflict_status: false,
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// Return the configuration directory (`~/.rattendance`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration directory, config file and database path.
    ///
    /// Returns the configuration that was (or, in test mode, would have
    /// been) written. The database file itself is created by SQLite.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => expand_tilde(name),
            None => dir.join(DATABASE_FILE),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };
        config.database = db_path.to_string_lossy().to_string();

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
