use serde::{Deserialize, Serialize};

use crate::domain::ssml::{OutputFormat, SsmlInput};

/// How the service should read the `inputs` texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextType {
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
}

/// Inputs of one job. A job is either all plain text or all SSML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchInputs {
    PlainText(Vec<String>),
    Ssml(Vec<SsmlInput>),
}

impl BatchInputs {
    pub fn text_type(&self) -> TextType {
        match self {
            Self::PlainText(_) => TextType::PlainText,
            Self::Ssml(_) => TextType::Ssml,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::PlainText(texts) => texts.len(),
            Self::Ssml(inputs) => inputs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_wire(self) -> Vec<BatchInput> {
        match self {
            Self::PlainText(texts) => texts.into_iter().map(|text| BatchInput { text }).collect(),
            Self::Ssml(inputs) => inputs
                .iter()
                .map(|input| BatchInput {
                    text: input.to_xml(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInput {
    pub text: String,
}

/// Optional outputs of a batch job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchJobFlags {
    pub word_boundary_enabled: bool,
    pub sentence_boundary_enabled: bool,
    /// Write every input's audio into a single output file
    pub concatenate_result: bool,
    pub decompress_output_files: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJobProperties {
    pub output_format: OutputFormat,
    pub word_boundary_enabled: bool,
    pub sentence_boundary_enabled: bool,
    pub concatenate_result: bool,
    pub decompress_output_files: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default)]
    pub voice: String,
}

/// Descriptor of one batch synthesis job, serialized as the create request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJobSpec {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub text_type: TextType,
    pub inputs: Vec<BatchInput>,
    pub properties: BatchJobProperties,
    pub synthesis_config: SynthesisConfig,
}

impl BatchJobSpec {
    /// Assemble a job descriptor. Input count and length limits are left to
    /// the service; an empty input list is sent as-is.
    pub fn new(
        display_name: impl Into<String>,
        inputs: BatchInputs,
        output_format: OutputFormat,
        flags: BatchJobFlags,
        voice: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            description: None,
            text_type: inputs.text_type(),
            inputs: inputs.into_wire(),
            properties: BatchJobProperties {
                output_format,
                word_boundary_enabled: flags.word_boundary_enabled,
                sentence_boundary_enabled: flags.sentence_boundary_enabled,
                concatenate_result: flags.concatenate_result,
                decompress_output_files: flags.decompress_output_files,
            },
            synthesis_config: SynthesisConfig {
                voice: voice.into(),
            },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
