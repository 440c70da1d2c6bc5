use bytes::Bytes;
use reqwest::Method;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::credentials::Credentials;
use crate::error::{Operation, SpeechError, SpeechResult};
use crate::infrastructure::endpoints::{
    Endpoints, CONTENT_TYPE_FORM, CONTENT_TYPE_HEADER, SUBSCRIPTION_KEY_HEADER,
};
use crate::infrastructure::http::{Transport, TransportRequest};

/// Lazily fetches and caches the bearer token.
///
/// The token is fetched once per manager and never refreshed. Concurrent first
/// callers wait on the same fetch; a failed fetch leaves the slot empty so the
/// next call tries again. Holding a manager past the token's real lifetime
/// surfaces as authentication failures downstream; build a new client to recover.
pub struct TokenManager {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    token_url: String,
    token: OnceCell<String>,
}

impl TokenManager {
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Arc<Credentials>,
        endpoints: &Endpoints,
    ) -> Self {
        Self {
            transport,
            credentials,
            token_url: endpoints.token_url.clone(),
            token: OnceCell::new(),
        }
    }

    /// Return the cached token, fetching it on first use
    pub async fn ensure_token(&self) -> SpeechResult<String> {
        let token = self.token.get_or_try_init(|| self.fetch_token()).await?;
        Ok(token.clone())
    }

    pub fn cached_token(&self) -> Option<&str> {
        self.token.get().map(String::as_str)
    }

    async fn fetch_token(&self) -> SpeechResult<String> {
        tracing::debug!(
            region = %self.credentials.region(),
            "Requesting bearer token"
        );

        let request = TransportRequest::new(Method::POST, self.token_url.as_str())
            .header(SUBSCRIPTION_KEY_HEADER, self.credentials.subscription_key())
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE_FORM)
            .body(Bytes::new());

        let response = self.transport.send(request).await?;

        if !response.status.is_success() {
            let status = response.status;
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("token request rejected")
                    .to_string()
            } else {
                body
            };
            tracing::error!(
                status = %status.as_u16(),
                region = %self.credentials.region(),
                "Token issuance failed"
            );
            return Err(SpeechError::Authentication { status, message });
        }

        let token = response.text().await?;
        if token.is_empty() {
            return Err(SpeechError::EmptyResponse(Operation::IssueToken));
        }

        tracing::info!(region = %self.credentials.region(), "Bearer token cached");
        Ok(token)
    }
}
