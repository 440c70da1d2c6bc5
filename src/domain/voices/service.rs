use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;

use super::dto::VoiceDescriptor;
use crate::domain::auth::Credentials;
use crate::domain::shared::{read_json, status_error};
use crate::error::{Operation, SpeechResult};
use crate::infrastructure::endpoints::{Endpoints, SUBSCRIPTION_KEY_HEADER};
use crate::infrastructure::http::{Transport, TransportRequest};

const VOICE_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

pub struct VoiceCatalog {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    endpoints: Arc<Endpoints>,
    cache: Option<Cache<String, Arc<Vec<VoiceDescriptor>>>>,
}

impl VoiceCatalog {
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Arc<Credentials>,
        endpoints: Arc<Endpoints>,
        cache_enabled: bool,
    ) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(1)
                    .time_to_live(VOICE_CACHE_TTL)
                    .build(),
            )
        } else {
            None
        };

        Self {
            transport,
            credentials,
            endpoints,
            cache,
        }
    }
}

#[async_trait]
pub trait VoiceCatalogApi: Send + Sync {
    /// Every voice the region offers, in service order
    async fn list_voices(&self) -> SpeechResult<Vec<VoiceDescriptor>>;

    /// Voices whose locale matches `locale`, ignoring case
    async fn voices_for_locale(&self, locale: &str) -> SpeechResult<Vec<VoiceDescriptor>>;
}

#[async_trait]
impl VoiceCatalogApi for VoiceCatalog {
    async fn list_voices(&self) -> SpeechResult<Vec<VoiceDescriptor>> {
        let url = &self.endpoints.voices_list_url;

        if let Some(cache) = &self.cache {
            if let Some(voices) = cache.get(url).await {
                tracing::debug!(count = voices.len(), "Voice list cache hit");
                return Ok(voices.as_ref().clone());
            }
        }

        let request = TransportRequest::new(Method::GET, url.as_str())
            .header(SUBSCRIPTION_KEY_HEADER, self.credentials.subscription_key());
        let response = self.transport.send(request).await?;

        if response.status != StatusCode::OK {
            return Err(status_error(Operation::ListVoices, response).await);
        }

        let voices: Vec<VoiceDescriptor> = read_json(Operation::ListVoices, response).await?;
        tracing::info!(
            region = %self.credentials.region(),
            count = voices.len(),
            "Fetched voice list"
        );

        if let Some(cache) = &self.cache {
            cache.insert(url.clone(), Arc::new(voices.clone())).await;
        }

        Ok(voices)
    }

    async fn voices_for_locale(&self, locale: &str) -> SpeechResult<Vec<VoiceDescriptor>> {
        let voices = self.list_voices().await?;
        Ok(voices
            .into_iter()
            .filter(|v| v.locale.eq_ignore_ascii_case(locale))
            .collect())
    }
}
