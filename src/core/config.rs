use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values merged with defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{yaml}");
        Ok(())
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL`, or the
    /// platform default, falling back to the default when the requested one
    /// fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            Config::default().save_to(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{requested}'"));
                Ok(())
            }
            _ if requested != default_editor => {
                warning(format!(
                    "Editor '{requested}' not available, falling back to '{default_editor}'"
                ));
                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => {
                        success(format!("Configuration file edited using '{default_editor}'"));
                        Ok(())
                    }
                    _ => Err(AppError::Config(format!(
                        "failed to edit configuration with '{default_editor}'"
                    ))),
                }
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration with '{requested}'"
            ))),
        }
    }
}
