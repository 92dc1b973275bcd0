// src/config/config_load.rs
//
// loading of config.toml for the viewer binary

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub paths: PathConfig,
    pub window: WindowConfig,
    pub panel: PanelConfig,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub data_file: String,
    pub sheet_index: String,
    pub sheet_image: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct PanelConfig {
    /// Packed 0xRRGGBB panel background.
    pub background: u32,
    /// Supersampling factor for the control face.
    pub face_scale: u32,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_dir = std::env::current_exe().ok()?.parent()?.to_path_buf();
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_data_path(&self) -> PathBuf {
        resolve(&self.paths.data_file)
    }

    pub fn resolve_sheet_index_path(&self) -> PathBuf {
        resolve(&self.paths.sheet_index)
    }

    pub fn resolve_sheet_image_path(&self) -> PathBuf {
        resolve(&self.paths.sheet_image)
    }
}

// Relative paths resolve against the executable's directory when
// possible, matching where build.rs drops config.toml.
fn resolve(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        return PathBuf::from(path);
    }
    match std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    {
        Some(exe_dir) => exe_dir.join(path),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let content = r#"
            [paths]
            data_file = "assets/data.json"
            sheet_index = "assets/sheet.json"
            sheet_image = "assets/sheet.png"

            [window]
            width = 800
            height = 600

            [panel]
            background = 0x313031
            face_scale = 2
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.panel.background, 0x313031);
        assert_eq!(config.panel.face_scale, 2);
    }
}
