use reqwest::header::HeaderValue;
use std::fmt;

use crate::error::{SpeechError, SpeechResult};

/// Subscription key and region. Immutable once validated.
#[derive(Clone)]
pub struct Credentials {
    subscription_key: String,
    region: String,
}

impl Credentials {
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> SpeechResult<Self> {
        let subscription_key = subscription_key.into();
        let region = region.into();

        if subscription_key.trim().is_empty() {
            return Err(SpeechError::Configuration(
                "subscription key is required".to_string(),
            ));
        }
        if region.trim().is_empty() {
            return Err(SpeechError::Configuration("region is required".to_string()));
        }
        if HeaderValue::from_str(&subscription_key).is_err() {
            return Err(SpeechError::Configuration(
                "subscription key contains characters not allowed in a header".to_string(),
            ));
        }

        Ok(Self {
            subscription_key,
            region: region.trim().to_string(),
        })
    }

    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("subscription_key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}
