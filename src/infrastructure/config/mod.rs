use serde::Deserialize;
use std::env;

use crate::error::{SpeechError, SpeechResult};
use crate::infrastructure::endpoints::DEFAULT_BATCH_API_VERSION;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub speech_key: String,
    pub speech_region: String,
    pub log_format: LogFormat,
    pub batch_api_version: String,
    // Overrides the regional hosts, e.g. for a local mock server
    pub endpoint_base_url: Option<String>,
    // Voice catalog cache
    pub voice_cache_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> SpeechResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            speech_key: required("SPEECH_KEY")?,
            speech_region: required("SPEECH_REGION")?,
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
            batch_api_version: env::var("BATCH_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_BATCH_API_VERSION.to_string()),
            endpoint_base_url: env::var("SPEECH_ENDPOINT_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            voice_cache_enabled: env::var("VOICE_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        };

        Ok(config)
    }
}

fn required(name: &str) -> SpeechResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SpeechError::Configuration(format!(
            "{} environment variable is required",
            name
        ))),
    }
}
