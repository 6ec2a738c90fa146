use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report keys missing from the file on disk; with `fix`, rewrite the
    /// file with defaults filled in.
    pub fn check(path: &Path, fix: bool) -> AppResult<Vec<&'static str>> {
        let content = if path.exists() {
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?
        } else {
            String::new()
        };

        let missing = Config::missing_keys(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
            return Ok(missing);
        }

        warning(format!("Missing configuration keys: {}", missing.join(", ")));

        if fix {
            let cfg = Config::parse(&content)?;
            cfg.save_to(path)?;
            success(format!("Configuration rewritten: {}", path.display()));
        }

        Ok(missing)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }

        success(format!("Configuration file edited using '{ed}'"));
        Ok(())
    }
}
