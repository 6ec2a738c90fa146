use crate::core::calendar::Granularity;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Every top-level key a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 5] = [
    "database",
    "poll_interval_secs",
    "log_level",
    "default_view",
    "show_weekday",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub default_view: Granularity,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_poll_interval() -> u64 {
    60
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            poll_interval_secs: default_poll_interval(),
            log_level: default_log_level(),
            default_view: Granularity::default(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("caresync")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".caresync")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("caresync.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("caresync.sqlite")
    }

    /// Load configuration from the default file, or defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Keys of [`CONFIG_KEYS`] absent from the YAML `content`.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Mapping(Default::default())
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))?
        };

        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root must be a mapping".into()))?;

        Ok(CONFIG_KEYS
            .into_iter()
            .filter(|k| !map.contains_key(serde_yaml::Value::String((*k).to_string())))
            .collect())
    }

    /// Resolve the database path: absolute as given, relative under the
    /// config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_name {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
