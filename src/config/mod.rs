use crate::core::calculator::WorkDaySettings;
use crate::errors::{AppError, AppResult};
use crate::models::pay_period::PayPeriod;
use crate::ui::messages::success;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

const CONFIG_FILE: &str = "crewledger.conf";
const DATABASE_FILE: &str = "crewledger.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_company_id")]
    pub company_id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(flatten)]
    pub work_day: WorkDaySettings,
    #[serde(default)]
    pub pay_period: PayPeriod,
    #[serde(default = "default_pay_period_start")]
    pub pay_period_start: NaiveDate,
}

fn default_company_id() -> String {
    "default".to_string()
}

fn default_pay_period_start() -> NaiveDate {
    // A Monday; weekly periods then run Monday to Sunday.
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db: PathBuf) -> Self {
        Self {
            database: db.to_string_lossy().to_string(),
            company_id: default_company_id(),
            company_name: String::new(),
            work_day: WorkDaySettings::default(),
            pay_period: PayPeriod::default(),
            pay_period_start: default_pay_period_start(),
        }
    }

    /// `$CREWLEDGER_HOME` when set, else `~/.crewledger`
    /// (`%APPDATA%\crewledger` on Windows).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("CREWLEDGER_HOME")
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("crewledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".crewledger")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load the configuration file, or defaults when there is none yet.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the configuration directory and file plus an empty database
    /// file. In test mode the configuration file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        Self::init_in(&Self::config_dir(), custom_db, is_test)
    }

    fn init_in(dir: &Path, custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(dir)?;
        let config_file = dir.join(CONFIG_FILE);

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join(DATABASE_FILE),
        };

        // Keep company settings from an existing file, only repoint the DB.
        // A file that does not parse stops init instead of being overwritten.
        let mut config = Self::load_from(&config_file)?;
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save_to(&config_file)?;
            success(format!("Config file: {}", config_file.display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.conf");
        fs::write(&path, "database: /tmp/x.sqlite\nwork_day_start: \"06:30\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.company_id, "default");
        assert_eq!(cfg.work_day.work_day_start.as_deref(), Some("06:30"));
        assert_eq!(cfg.work_day.work_day_end, None);
        assert_eq!(cfg.pay_period, PayPeriod::Weekly);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.conf");
        let mut cfg = Config::with_database(dir.path().join("db.sqlite"));
        cfg.company_name = "Acme Framing".into();
        cfg.work_day.break_time = Some(45);
        cfg.pay_period = PayPeriod::Monthly;

        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn broken_yaml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.conf");
        fs::write(&path, "database: [unclosed").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::ConfigLoad(_))));
    }

    #[test]
    fn init_keeps_company_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "database: old.sqlite\ncompany_name: Acme Framing\n").unwrap();

        let cfg = Config::init_in(dir.path(), Some("new.sqlite"), false).unwrap();
        assert_eq!(cfg.company_name, "Acme Framing");
        assert!(cfg.database.ends_with("new.sqlite"));
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn init_refuses_to_overwrite_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "company_name: Acme\ndatabase: [unclosed").unwrap();

        assert!(matches!(
            Config::init_in(dir.path(), None, false),
            Err(AppError::ConfigLoad(_))
        ));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "company_name: Acme\ndatabase: [unclosed"
        );
        assert!(!dir.path().join(DATABASE_FILE).exists());
    }
}
