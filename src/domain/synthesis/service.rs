use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::Instant;

use super::stream::AudioStream;
use crate::domain::auth::{Credentials, TokenManager};
use crate::domain::shared::status_error;
use crate::domain::ssml::{OutputFormat, SpeakDocument};
use crate::error::{Operation, SpeechError, SpeechResult};
use crate::infrastructure::endpoints::{
    bearer, Endpoints, AUTHORIZATION_HEADER, CONTENT_TYPE_HEADER, CONTENT_TYPE_SSML,
    OUTPUT_FORMAT_HEADER, SUBSCRIPTION_KEY_HEADER,
};
use crate::infrastructure::http::{Transport, TransportError, TransportRequest};

/// Upper bound for one synthesis exchange, body included
pub const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Size of the writes issued by [`SynthesisClient::synthesize_to_writer`]
pub const WRITE_CHUNK_SIZE: usize = 4096;

pub struct SynthesisClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    endpoints: Arc<Endpoints>,
    tokens: Arc<TokenManager>,
}

impl SynthesisClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        credentials: Arc<Credentials>,
        endpoints: Arc<Endpoints>,
        tokens: Arc<TokenManager>,
    ) -> Self {
        Self {
            transport,
            credentials,
            endpoints,
            tokens,
        }
    }

    /// Synthesize straight into `writer`, returning the number of bytes written.
    ///
    /// Stops at the first read or write failure; whatever was already written
    /// stays in the sink.
    pub async fn synthesize_to_writer<W>(
        &self,
        format: OutputFormat,
        document: &SpeakDocument,
        writer: &mut W,
    ) -> SpeechResult<u64>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let mut audio = self.synthesize(format, document).await?;
        let mut written = 0u64;

        while let Some(chunk) = audio.next().await {
            let chunk = chunk?;
            for piece in chunk.chunks(WRITE_CHUNK_SIZE) {
                writer.write_all(piece).await.map_err(SpeechError::Sink)?;
            }
            written += chunk.len() as u64;
        }
        writer.flush().await.map_err(SpeechError::Sink)?;

        tracing::debug!(bytes = written, format = %format, "Audio written to sink");
        Ok(written)
    }
}

#[async_trait]
pub trait SynthesisApi: Send + Sync {
    /// Synthesize one document.
    ///
    /// The returned stream reads the audio lazily and must finish within
    /// [`SYNTHESIS_TIMEOUT`] of the call.
    async fn synthesize(
        &self,
        format: OutputFormat,
        document: &SpeakDocument,
    ) -> SpeechResult<AudioStream>;
}

#[async_trait]
impl SynthesisApi for SynthesisClient {
    async fn synthesize(
        &self,
        format: OutputFormat,
        document: &SpeakDocument,
    ) -> SpeechResult<AudioStream> {
        let deadline = Instant::now() + SYNTHESIS_TIMEOUT;
        let token = tokio::time::timeout_at(deadline, self.tokens.ensure_token())
            .await
            .map_err(|_| TransportError::Timeout)??;

        tracing::info!(
            voice = %document.voice.name,
            lang = %document.lang,
            format = %format,
            text_length = document.voice.text.len(),
            "Synthesis request"
        );

        let request = TransportRequest::new(Method::POST, self.endpoints.synthesis_url.as_str())
            .header(SUBSCRIPTION_KEY_HEADER, self.credentials.subscription_key())
            .header(OUTPUT_FORMAT_HEADER, format.as_str())
            .header(AUTHORIZATION_HEADER, bearer(&token))
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE_SSML)
            .body(document.to_xml())
            .timeout(SYNTHESIS_TIMEOUT);

        let started = Instant::now();
        let response = tokio::time::timeout_at(deadline, self.transport.send(request))
            .await
            .map_err(|_| TransportError::Timeout)??;

        tracing::debug!(
            status = %response.status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            content_length = ?response.content_length,
            "Synthesis response received"
        );

        if !response.status.is_success() {
            let error =
                tokio::time::timeout_at(deadline, status_error(Operation::Synthesize, response))
                    .await
                    .map_err(|_| TransportError::Timeout)?;
            return Err(error);
        }

        let content_length = response.content_length;
        match content_length {
            Some(0) => {
                tracing::warn!(voice = %document.voice.name, "Synthesis returned no audio");
                Err(SpeechError::EmptyResponse(Operation::Synthesize))
            }
            Some(_) => Ok(AudioStream::new(None, response.body, deadline, content_length)),
            None => {
                // No announced length; look for a first non-empty chunk
                let mut body = response.body;
                let first = loop {
                    let next = tokio::time::timeout_at(deadline, body.next())
                        .await
                        .map_err(|_| TransportError::Timeout)?;
                    match next {
                        Some(Ok(chunk)) if chunk.is_empty() => continue,
                        Some(Ok(chunk)) => break chunk,
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            tracing::warn!(voice = %document.voice.name, "Synthesis returned no audio");
                            return Err(SpeechError::EmptyResponse(Operation::Synthesize));
                        }
                    }
                };
                Ok(AudioStream::new(Some(first), body, deadline, None))
            }
        }
    }
}
