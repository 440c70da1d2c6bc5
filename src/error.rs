use reqwest::StatusCode;
use std::fmt;

use crate::infrastructure::http::TransportError;

/// Longest error body kept on an `HttpStatus` error
const MAX_ERROR_BODY_LEN: usize = 500;

/// Remote operation an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    IssueToken,
    ListVoices,
    Synthesize,
    CreateJob,
    GetJob,
    ListJobs,
    DeleteJob,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IssueToken => "issue_token",
            Self::ListVoices => "list_voices",
            Self::Synthesize => "synthesize",
            Self::CreateJob => "create_job",
            Self::GetJob => "get_job",
            Self::ListJobs => "list_jobs",
            Self::DeleteJob => "delete_job",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main client error type
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {status}: {message}")]
    Authentication { status: StatusCode, message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{operation} returned unexpected status {status}: {body}")]
    HttpStatus {
        operation: Operation,
        status: StatusCode,
        body: String,
    },

    #[error("{0} returned an empty response body")]
    EmptyResponse(Operation),

    #[error("Failed to encode {operation} request: {source}")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write audio: {0}")]
    Sink(#[source] std::io::Error),
}

impl SpeechError {
    /// Build an `HttpStatus` error, capping the body text
    pub fn http_status(operation: Operation, status: StatusCode, body: String) -> Self {
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated)", &body[..end])
        } else {
            body
        };

        Self::HttpStatus {
            operation,
            status,
            body,
        }
    }

    /// Status code carried by the error, if the server answered at all
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Authentication { status, .. } | Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Custom result type for the client
pub type SpeechResult<T> = Result<T, SpeechError>;
