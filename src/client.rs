use std::sync::Arc;

use crate::domain::auth::{Credentials, TokenManager};
use crate::domain::batch::BatchJobClient;
use crate::domain::synthesis::SynthesisClient;
use crate::domain::voices::VoiceCatalog;
use crate::error::{SpeechError, SpeechResult};
use crate::infrastructure::config::Config;
use crate::infrastructure::endpoints::{Endpoints, DEFAULT_BATCH_API_VERSION};
use crate::infrastructure::http::{ReqwestTransport, Transport};

/// Entry point bundling the three service clients.
///
/// All of them share one transport and one token slot.
pub struct SpeechClient {
    synthesis: Arc<SynthesisClient>,
    batch: Arc<BatchJobClient>,
    voices: Arc<VoiceCatalog>,
    tokens: Arc<TokenManager>,
    endpoints: Arc<Endpoints>,
}

impl std::fmt::Debug for SpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl SpeechClient {
    pub fn builder() -> SpeechClientBuilder {
        SpeechClientBuilder::default()
    }

    pub fn synthesis(&self) -> Arc<SynthesisClient> {
        self.synthesis.clone()
    }

    pub fn batch(&self) -> Arc<BatchJobClient> {
        self.batch.clone()
    }

    pub fn voices(&self) -> Arc<VoiceCatalog> {
        self.voices.clone()
    }

    pub fn tokens(&self) -> Arc<TokenManager> {
        self.tokens.clone()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[derive(Default)]
pub struct SpeechClientBuilder {
    subscription_key: Option<String>,
    region: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    endpoint_base_url: Option<String>,
    batch_api_version: Option<String>,
    voice_cache_enabled: bool,
}

impl SpeechClientBuilder {
    pub fn from_config(config: &Config) -> Self {
        Self {
            subscription_key: Some(config.speech_key.clone()),
            region: Some(config.speech_region.clone()),
            transport: None,
            endpoint_base_url: config.endpoint_base_url.clone(),
            batch_api_version: Some(config.batch_api_version.clone()),
            voice_cache_enabled: config.voice_cache_enabled,
        }
    }

    pub fn subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use a custom transport instead of the default reqwest one
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Send every request under `base_url` instead of the regional hosts
    pub fn endpoint_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.endpoint_base_url = Some(base_url.into());
        self
    }

    pub fn batch_api_version(mut self, version: impl Into<String>) -> Self {
        self.batch_api_version = Some(version.into());
        self
    }

    pub fn voice_cache(mut self, enabled: bool) -> Self {
        self.voice_cache_enabled = enabled;
        self
    }

    /// Validate the settings and wire the clients. Makes no network calls.
    pub fn build(self) -> SpeechResult<SpeechClient> {
        let credentials = Arc::new(Credentials::new(
            self.subscription_key.unwrap_or_default(),
            self.region.unwrap_or_default(),
        )?);

        let version = self
            .batch_api_version
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BATCH_API_VERSION.to_string());
        let endpoints = Arc::new(match &self.endpoint_base_url {
            Some(base) => Endpoints::from_base_url(base, &version),
            None => Endpoints::for_region(credentials.region(), &version),
        });

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new().map_err(|e| {
                SpeechError::Configuration(format!("failed to create HTTP transport: {}", e))
            })?),
        };

        let tokens = Arc::new(TokenManager::new(
            transport.clone(),
            credentials.clone(),
            &endpoints,
        ));
        let synthesis = Arc::new(SynthesisClient::new(
            transport.clone(),
            credentials.clone(),
            endpoints.clone(),
            tokens.clone(),
        ));
        let batch = Arc::new(BatchJobClient::new(
            transport.clone(),
            credentials.clone(),
            endpoints.clone(),
        ));
        let voices = Arc::new(VoiceCatalog::new(
            transport,
            credentials.clone(),
            endpoints.clone(),
            self.voice_cache_enabled,
        ));

        tracing::debug!(
            region = %credentials.region(),
            batch_url = %endpoints.batch_url,
            voice_cache = self.voice_cache_enabled,
            "Speech client configured"
        );

        Ok(SpeechClient {
            synthesis,
            batch,
            voices,
            tokens,
            endpoints,
        })
    }
}
