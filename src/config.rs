use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::simulator::{DEFAULT_CANNED_REPLIES, SimulatorSettings};

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub compose_delay_ms: u64,
    pub reply_delay_ms: u64,
    pub canned_replies: Vec<String>,
    pub seed_history: bool,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            compose_delay_ms: 1000,
            reply_delay_ms: 2000,
            canned_replies: DEFAULT_CANNED_REPLIES
                .iter()
                .map(|reply| reply.to_string())
                .collect(),
            seed_history: true,
            window_title: "Sistema de Mensagens Instantâneas".to_string(),
        }
    }
}

impl AppConfig {
    pub fn simulator_settings(&self) -> SimulatorSettings {
        let canned_replies = if self.canned_replies.is_empty() {
            log::warn!("Config has no canned replies; using the built-in set");
            AppConfig::default().canned_replies
        } else {
            self.canned_replies.clone()
        };

        SimulatorSettings {
            compose_delay: Duration::from_millis(self.compose_delay_ms),
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            canned_replies,
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
