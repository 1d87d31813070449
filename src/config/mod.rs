use crate::core::daily::DEFAULT_DAILY_TARGET_MINUTES;
use crate::errors::{AppError, AppResult};
use crate::models::{Grouping, TimeRange};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub default_range: TimeRange,
    #[serde(default)]
    pub default_grouping: Grouping,
    #[serde(default)]
    pub min_duration: i64,
    #[serde(default = "default_daily_target")]
    pub daily_target_minutes: u64,
}

fn default_daily_target() -> u64 {
    DEFAULT_DAILY_TARGET_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_range: TimeRange::All,
            default_grouping: Grouping::Category,
            min_duration: 0,
            daily_target_minutes: default_daily_target(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimelens")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimelens")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimelens.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimelens.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        if cfg.min_duration < 0 {
            return Err(AppError::Config(format!(
                "min_duration must be >= 0 (found {}) in {}",
                cfg.min_duration,
                path.display()
            )));
        }
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the config directory and file. Returns the database path
    /// that the new configuration points to.
    ///
    /// In test mode the file is not written, only the directory is ensured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) if Path::new(name).is_absolute() => PathBuf::from(name),
            Some(name) => dir.join(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_conf(name: &str, body: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{name}_rtimelens.conf"));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_fields_take_defaults() {
        let path = temp_conf("cfg_defaults", "database: /tmp/x.sqlite\n");
        let cfg = Config::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.default_range, TimeRange::All);
        assert_eq!(cfg.default_grouping, Grouping::Category);
        assert_eq!(cfg.daily_target_minutes, 480);
    }

    #[test]
    fn reads_kebab_case_ranges() {
        let path = temp_conf(
            "cfg_ranges",
            "database: db.sqlite\ndefault_range: last-two-weeks\ndefault_grouping: occupation\nmin_duration: 15\n",
        );
        let cfg = Config::load_from(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(cfg.default_range, TimeRange::LastTwoWeeks);
        assert_eq!(cfg.default_grouping, Grouping::Occupation);
        assert_eq!(cfg.min_duration, 15);
    }

    #[test]
    fn negative_min_duration_is_rejected() {
        let path = temp_conf("cfg_negative", "database: db.sqlite\nmin_duration: -3\n");
        let res = Config::load_from(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(res, Err(AppError::Config(_))));
    }

    #[test]
    fn absent_file_gives_defaults() {
        let cfg = Config::load_from(Path::new("/no/such/rtimelens.conf")).unwrap();
        assert_eq!(cfg.daily_target_minutes, DEFAULT_DAILY_TARGET_MINUTES);
    }
}
