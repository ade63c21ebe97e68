use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_state_path")]
    pub state_path: String,
    #[serde(default = "default_trainer")]
    pub default_trainer: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    // Gemini API settings
    #[serde(default)]
    pub gemini_api_key: String,
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
}

fn default_state_path() -> String {
    "./.formtrack/state.json".to_string()
}

fn default_trainer() -> String {
    "Rali El kohen".to_string()
}

fn default_poll_interval_secs() -> u64 {
    60
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            default_trainer: default_trainer(),
            poll_interval_secs: default_poll_interval_secs(),
            gemini_api_key: String::new(),
            gemini_model: default_gemini_model(),
            gemini_base_url: default_gemini_base_url(),
        }
    }
}
