use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;
use crate::markdown::PageStyle;
use crate::markdown::outline::DEFAULT_TOC_HEADING;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Prepend a table of contents to previewed and exported pages.
    #[serde(default = "default_include_toc")]
    pub include_toc: bool,

    #[serde(default = "default_document_lang")]
    pub document_lang: String,

    #[serde(default = "default_toc_title")]
    pub toc_title: String,

    #[serde(default)]
    pub last_open_directory: Option<String>,
}

fn default_word_wrap() -> bool {
    true
}

fn default_font_size() -> u32 {
    16
}

fn default_window_width() -> i32 {
    1200
}

fn default_window_height() -> i32 {
    800
}

fn default_include_toc() -> bool {
    true
}

fn default_document_lang() -> String {
    "zh-CN".to_string()
}

fn default_toc_title() -> String {
    DEFAULT_TOC_HEADING.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            word_wrap_enabled: default_word_wrap(),
            font_size: default_font_size(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            include_toc: default_include_toc(),
            document_lang: default_document_lang(),
            toc_title: default_toc_title(),
            last_open_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(config_path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markup");
        path.push("settings.json");
        path
    }

    pub fn page_style(&self) -> PageStyle {
        PageStyle {
            lang: self.document_lang.clone(),
            toc_heading: self.toc_title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.word_wrap_enabled);
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.window_width, 1200);
        assert_eq!(settings.window_height, 800);
        assert!(settings.include_toc);
        assert_eq!(settings.document_lang, "zh-CN");
        assert_eq!(settings.toc_title, "目录");
        assert!(settings.last_open_directory.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old config missing new fields
        let json = r#"{"word_wrap_enabled": false, "document_lang": "en"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.word_wrap_enabled);
        assert_eq!(settings.document_lang, "en");
        assert_eq!(settings.font_size, 16);
        assert!(settings.include_toc);
    }

    #[test]
    fn test_page_style_follows_settings() {
        let settings = AppSettings {
            document_lang: "en".to_string(),
            toc_title: "Contents".to_string(),
            ..Default::default()
        };
        let style = settings.page_style();
        assert_eq!(style.lang, "en");
        assert_eq!(style.toc_heading, "Contents");
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            font_size: 20,
            last_open_directory: Some("/home/user/docs".to_string()),
            ..Default::default()
        };

        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
