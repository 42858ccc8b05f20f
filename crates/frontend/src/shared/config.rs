use anyhow::Context;
use contracts::domain::a001_booking::BOOKING_STORAGE_KEY;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// localStorage key holding the booking snapshot
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfig {
    /// Artificial wait before a submitted booking is stored
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[storage]
key = "booking-storage"

[booking]
submit_delay_ms = 800
"#;

fn default_storage_key() -> String {
    BOOKING_STORAGE_KEY.to_string()
}

fn default_submit_delay_ms() -> u32 {
    800
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_storage_key(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    toml::from_str(contents).context("invalid application config")
}

/// Load the embedded configuration, falling back to defaults on error
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::info!("Using embedded configuration");
            config
        }
        Err(e) => {
            log::warn!("{:#}; using built-in defaults", e);
            AppConfig::default()
        }
    }
}
