use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dash: DashSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSettings {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashSettings {
    pub dark: Option<bool>,
    pub time_step: Option<f32>,
    pub seed: Option<u64>, // keyword cloud layout seed
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("newsdash")
            .join("config.toml")
    }
}
