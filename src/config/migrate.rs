//! Configuration file upkeep: detect settings missing from an older file
//! and write them back with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current configuration file should carry.
fn expected_keys() -> AppResult<Mapping> {
    let defaults = serde_yaml::to_value(Config::default())?;
    match defaults {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Names of the settings absent from the file at `path`, in default order.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;

    Ok(expected_keys()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are never
/// touched. Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in expected_keys()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, serialized)
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_and_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crewledger.conf");
        fs::write(&path, "database: /data/c.sqlite\nbreak_time: 30\n").unwrap();

        let missing = missing_keys(&path).unwrap();
        assert!(missing.contains(&"pay_period".to_string()));
        assert!(missing.contains(&"work_day_start".to_string()));
        assert!(!missing.contains(&"database".to_string()));
        assert!(!missing.contains(&"break_time".to_string()));

        let added = migrate_config_file(&path).unwrap();
        assert_eq!(added, missing);
        assert!(missing_keys(&path).unwrap().is_empty());

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/data/c.sqlite");
        assert_eq!(cfg.work_day.break_time, Some(30));
    }

    #[test]
    fn complete_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crewledger.conf");
        Config::default().save_to(&path).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(migrate_config_file(&path).unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
