use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(Vec::new());
        }

        let missing = missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing settings: {}", missing.join(", ")));
            info("Run `crewledger config --migrate` to add them with default values.");
        }
        Ok(missing)
    }

    pub fn migrate(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::ConfigLoad(format!("{} does not exist", path.display())));
        }

        let added = migrate_config_file(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added settings: {}", added.join(", ")));
        }
        Ok(added)
    }

    /// Open the file in `editor`, `$EDITOR`/`$VISUAL`, or a platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let chosen = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&chosen).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{}'", chosen));
                Ok(())
            }
            _ if chosen != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    chosen, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(format!("{default_editor}: {e}")))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::Config(format!("'{default_editor}' exited with {status}")))
                }
            }
            Ok(s) => Err(AppError::Config(format!("'{chosen}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("{chosen}: {e}"))),
        }
    }
}
