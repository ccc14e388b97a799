use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_workbook")]
    pub workbook: String,
    /// Separate workbook holding the food catalog (defaults to `workbook`)
    #[serde(default)]
    pub catalog_workbook: Option<String>,
    #[serde(default)]
    pub catalog_sheet: usize,
    #[serde(default = "default_log_sheet")]
    pub log_sheet: usize,
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_workbook() -> String {
    Config::workbook_file().to_string_lossy().to_string()
}
fn default_log_sheet() -> usize {
    1
}
fn default_window_title() -> String {
    "Calorie Calculator".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            catalog_workbook: None,
            catalog_sheet: 0,
            log_sheet: default_log_sheet(),
            window_title: default_window_title(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.calorielog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".calorielog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("calorielog.conf")
    }

    /// Return the default path of the calorie workbook
    pub fn workbook_file() -> PathBuf {
        Self::config_dir().join("calorie.xlsx")
    }

    /// Path of the workbook that holds the catalog sheet.
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(self.catalog_workbook.as_deref().unwrap_or(&self.workbook))
    }

    /// Path of the workbook that holds the daily log sheet.
    pub fn workbook_path(&self) -> PathBuf {
        PathBuf::from(&self.workbook)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration file, creating the directory if needed
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}
