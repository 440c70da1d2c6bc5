use serde::{Deserialize, Serialize};

/// Error body returned by the batch endpoints on rejected requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<ServiceErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl ServiceErrorBody {
    /// Parse a structured error body; `None` for anything else
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<ServiceErrorBody>(body)
            .ok()
            .filter(|e| !e.code.is_empty() || !e.message.is_empty())
    }

    /// `code: message`, preferring the inner error when present
    pub fn summary(&self) -> String {
        match &self.inner_error {
            Some(inner) if !inner.message.is_empty() => {
                format!("{}: {} ({}: {})", self.code, self.message, inner.code, inner.message)
            }
            _ => format!("{}: {}", self.code, self.message),
        }
    }
}
