//! Scripted transport used by unit tests.

use super::{Transport, TransportError, TransportRequest, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use futures::{stream, StreamExt};
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::time::Duration;

pub struct MockResponse {
    status: StatusCode,
    headers: Vec<(&'static str, String)>,
    chunks: Vec<Bytes>,
    content_length: Option<u64>,
    stall_after_body: bool,
}

impl MockResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            chunks: Vec::new(),
            content_length: Some(0),
            stall_after_body: false,
        }
    }

    /// Body with a known Content-Length
    pub fn body(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            content_length: Some(body.len() as u64),
            chunks: vec![body],
            ..Self::new(status)
        }
    }

    pub fn json(status: StatusCode, value: serde_json::Value) -> Self {
        Self::body(status, value.to_string()).with_header("content-type", "application/json")
    }

    /// Chunked body without a Content-Length
    pub fn chunked(status: StatusCode, chunks: Vec<&'static [u8]>) -> Self {
        Self {
            chunks: chunks.into_iter().map(Bytes::from_static).collect(),
            content_length: None,
            ..Self::new(status)
        }
    }

    /// Body that never finishes after its chunks are delivered
    pub fn stalled(mut self) -> Self {
        self.stall_after_body = true;
        self
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    fn into_response(self) -> TransportResponse {
        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            if let Ok(value) = HeaderValue::from_str(&value) {
                headers.insert(HeaderName::from_static(name), value);
            }
        }

        let chunks = stream::iter(self.chunks.into_iter().map(Ok));
        let body = if self.stall_after_body {
            chunks.chain(stream::pending()).boxed()
        } else {
            chunks.boxed()
        };

        TransportResponse {
            status: self.status,
            headers,
            content_length: self.content_length,
            body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: reqwest::Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        self.body
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<MockResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: MockResponse) -> Self {
        self.script.lock().push_back(Ok(response));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.script.lock().push_back(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(RecordedRequest {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body: request.body,
            timeout: request.timeout,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self.script.lock().pop_front();
        match next {
            Some(Ok(response)) => Ok(response.into_response()),
            Some(Err(error)) => Err(error),
            None => Err(TransportError::Send("no scripted response left".to_string())),
        }
    }
}
