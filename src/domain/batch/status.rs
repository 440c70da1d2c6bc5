use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dto::SynthesisConfig;

/// Lifecycle state reported by the service.
///
/// Values the client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    NotStarted,
    Running,
    Succeeded,
    Failed,
    Unrecognized(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotStarted => "NotStarted",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Unrecognized(value) => value,
        }
    }

    /// No further transitions are expected
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NotStarted" => Self::NotStarted,
            "Running" => Self::Running,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    #[serde(default)]
    pub custom_neural: u64,
    #[serde(default)]
    pub neural: u64,
}

/// Failure reported on a job that did not succeed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProperties {
    /// ISO 8601 duration the service keeps the job around, e.g. `P31D`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(default)]
    pub concatenate_result: bool,
    #[serde(default)]
    pub decompress_output_files: bool,
    #[serde(default)]
    pub word_boundary_enabled: bool,
    #[serde(default)]
    pub sentence_boundary_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_ticks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub succeeded_audio_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JobError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutputs {
    /// Download URL of the result archive, set once the job succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Status envelope of a batch job, as returned by create, get and list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJobStatus {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action_date_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis_config: Option<SynthesisConfig>,
    #[serde(default)]
    pub properties: JobProperties,
    #[serde(default)]
    pub outputs: JobOutputs,
}

/// A created job is described by the same envelope the service returns for it
pub type BatchJobHandle = BatchJobStatus;

impl BatchJobStatus {
    pub fn result_url(&self) -> Option<&str> {
        self.outputs.result.as_deref().filter(|url| !url.is_empty())
    }

    /// Reported failure, if it carries any detail
    pub fn error(&self) -> Option<&JobError> {
        self.properties
            .error
            .as_ref()
            .filter(|e| !e.code.is_empty() || !e.message.is_empty())
    }
}

/// Page returned by the list endpoint. `values` is required; an empty page
/// still carries it.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BatchJobPage {
    pub values: Vec<BatchJobStatus>,
}
