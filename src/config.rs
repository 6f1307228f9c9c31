//! Server configuration from environment variables

use crate::identify::classifier::DEFAULT_TOP_N;
use crate::weather::client::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to crop_data.json
    pub crop_data_path: String,
    pub port: u16,
    pub weather_base_url: String,
    pub weather_api_key: String,
    /// Model-serving endpoint for crop photos
    pub classifier_url: String,
    pub classifier_top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            crop_data_path: "data/crop_data.json".to_string(),
            port: 3000,
            weather_base_url: DEFAULT_BASE_URL.to_string(),
            weather_api_key: String::new(),
            classifier_url: "http://127.0.0.1:8501/classify".to_string(),
            classifier_top_n: DEFAULT_TOP_N,
        }
    }
}

impl AppConfig {
    /// Read configuration, falling back to defaults for unset or unparsable values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            crop_data_path: lookup("CROP_DATA_PATH").unwrap_or(defaults.crop_data_path),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            weather_base_url: lookup("WEATHER_BASE_URL").unwrap_or(defaults.weather_base_url),
            weather_api_key: lookup("WEATHER_API_KEY").unwrap_or(defaults.weather_api_key),
            classifier_url: lookup("CLASSIFIER_URL").unwrap_or(defaults.classifier_url),
            classifier_top_n: lookup("CLASSIFIER_TOP_N")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.classifier_top_n),
        }
    }

    /// Log the configuration without revealing the API key
    pub fn log(&self) {
        let key_state = if self.weather_api_key.is_empty() { "(unset)" } else { "(set)" };
        tracing::info!("Configuration:");
        tracing::info!("  CROP_DATA_PATH: {}", self.crop_data_path);
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  WEATHER_BASE_URL: {}", self.weather_base_url);
        tracing::info!("  WEATHER_API_KEY: {}", key_state);
        tracing::info!("  CLASSIFIER_URL: {}", self.classifier_url);
        tracing::info!("  CLASSIFIER_TOP_N: {}", self.classifier_top_n);
    }
}
