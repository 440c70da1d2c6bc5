use serde::{Deserialize, Serialize};

/// One entry of the voice list. The service sends numbers as strings, and
/// they are kept that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VoiceDescriptor {
    pub name: String,
    pub display_name: String,
    pub local_name: String,
    pub short_name: String,
    pub gender: String,
    pub locale: String,
    pub locale_name: String,
    pub sample_rate_hertz: String,
    pub voice_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_per_minute: Option<String>,
}
