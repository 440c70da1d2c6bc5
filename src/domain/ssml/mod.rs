//! Voice markup (SSML) documents.
//!
//! Text handed to these builders is plain text; escaping of reserved markup
//! characters happens here during rendering. The only way to place raw markup
//! into a document is [`SsmlInput::markup`].

pub mod output_format;

pub use output_format::OutputFormat;

use std::fmt;

pub const SSML_VERSION: &str = "1.0";
pub const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Neutral,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a short-form synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub lang: String,
    pub voice_name: String,
    pub gender: Gender,
    pub text: String,
}

/// `<voice>` element of a synthesis document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceElement {
    pub lang: String,
    pub gender: Gender,
    pub name: String,
    pub text: String,
}

/// Single-utterance synthesis document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakDocument {
    pub version: &'static str,
    pub lang: String,
    pub voice: VoiceElement,
}

impl SpeakDocument {
    pub fn new(
        lang: impl Into<String>,
        voice_name: impl Into<String>,
        gender: Gender,
        text: impl Into<String>,
    ) -> Self {
        let lang = lang.into();
        Self {
            version: SSML_VERSION,
            voice: VoiceElement {
                lang: lang.clone(),
                gender,
                name: voice_name.into(),
                text: text.into(),
            },
            lang,
        }
    }

    /// Render the document, escaping attribute values and text
    pub fn to_xml(&self) -> String {
        format!(
            "<speak version='{}' xmlns='{}' xml:lang='{}'><voice xml:lang='{}' xml:gender='{}' name='{}'>{}</voice></speak>",
            self.version,
            SSML_NAMESPACE,
            escape_xml(&self.lang),
            escape_xml(&self.voice.lang),
            self.voice.gender,
            escape_xml(&self.voice.name),
            escape_xml(&self.voice.text),
        )
    }
}

impl From<SynthesisRequest> for SpeakDocument {
    fn from(request: SynthesisRequest) -> Self {
        SpeakDocument::new(request.lang, request.voice_name, request.gender, request.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SsmlContent {
    Text(String),
    Markup(String),
}

/// One batch input wrapped in its own `<speak>` document, which lets every
/// input carry its own language and voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsmlInput {
    lang: String,
    voice: String,
    content: SsmlContent,
}

impl SsmlInput {
    /// Plain text, escaped on render
    pub fn text(lang: impl Into<String>, voice: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            voice: voice.into(),
            content: SsmlContent::Text(text.into()),
        }
    }

    /// Caller-supplied inner markup (e.g. `<prosody>` or `<break/>`), inserted verbatim
    pub fn markup(
        lang: impl Into<String>,
        voice: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        Self {
            lang: lang.into(),
            voice: voice.into(),
            content: SsmlContent::Markup(markup.into()),
        }
    }

    pub fn to_xml(&self) -> String {
        let inner = match &self.content {
            SsmlContent::Text(text) => escape_xml(text),
            SsmlContent::Markup(markup) => markup.clone(),
        };
        format!(
            "<speak version='{}' xmlns='{}' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
            SSML_VERSION,
            SSML_NAMESPACE,
            escape_xml(&self.lang),
            escape_xml(&self.voice),
            inner,
        )
    }
}

/// Escape the five XML reserved characters
pub fn escape_xml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
