use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Audio encodings accepted in the `X-Microsoft-OutputFormat` header and in
/// batch job properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    AmrWb16000Hz,
    Audio16Khz16Bit32KbpsMonoOpus,
    Audio16Khz32KBitRateMonoMp3,
    Audio16Khz64KBitRateMonoMp3,
    Audio16Khz128KBitRateMonoMp3,
    Audio24Khz16Bit24KbpsMonoOpus,
    Audio24Khz16Bit48KbpsMonoOpus,
    #[default]
    Audio24Khz48KBitRateMonoMp3,
    Audio24Khz96KBitRateMonoMp3,
    Audio24Khz160KBitRateMonoMp3,
    Audio48Khz96KBitRateMonoMp3,
    Audio48Khz192KBitRateMonoMp3,
    Ogg16Khz16BitMonoOpus,
    Ogg24Khz16BitMonoOpus,
    Ogg48Khz16BitMonoOpus,
    Raw8Khz8BitMonoALaw,
    Raw8Khz8BitMonoMuLaw,
    Raw8Khz16BitMonoPcm,
    Raw16Khz16BitMonoPcm,
    Raw16Khz16BitMonoTrueSilk,
    Raw22050Hz16BitMonoPcm,
    Raw24Khz16BitMonoPcm,
    Raw24Khz16BitMonoTrueSilk,
    Raw44100Hz16BitMonoPcm,
    Raw48Khz16BitMonoPcm,
    Webm16Khz16BitMonoOpus,
    Webm24Khz16Bit24KbpsMonoOpus,
    Webm24Khz16BitMonoOpus,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 28] = [
        Self::AmrWb16000Hz,
        Self::Audio16Khz16Bit32KbpsMonoOpus,
        Self::Audio16Khz32KBitRateMonoMp3,
        Self::Audio16Khz64KBitRateMonoMp3,
        Self::Audio16Khz128KBitRateMonoMp3,
        Self::Audio24Khz16Bit24KbpsMonoOpus,
        Self::Audio24Khz16Bit48KbpsMonoOpus,
        Self::Audio24Khz48KBitRateMonoMp3,
        Self::Audio24Khz96KBitRateMonoMp3,
        Self::Audio24Khz160KBitRateMonoMp3,
        Self::Audio48Khz96KBitRateMonoMp3,
        Self::Audio48Khz192KBitRateMonoMp3,
        Self::Ogg16Khz16BitMonoOpus,
        Self::Ogg24Khz16BitMonoOpus,
        Self::Ogg48Khz16BitMonoOpus,
        Self::Raw8Khz8BitMonoALaw,
        Self::Raw8Khz8BitMonoMuLaw,
        Self::Raw8Khz16BitMonoPcm,
        Self::Raw16Khz16BitMonoPcm,
        Self::Raw16Khz16BitMonoTrueSilk,
        Self::Raw22050Hz16BitMonoPcm,
        Self::Raw24Khz16BitMonoPcm,
        Self::Raw24Khz16BitMonoTrueSilk,
        Self::Raw44100Hz16BitMonoPcm,
        Self::Raw48Khz16BitMonoPcm,
        Self::Webm16Khz16BitMonoOpus,
        Self::Webm24Khz16Bit24KbpsMonoOpus,
        Self::Webm24Khz16BitMonoOpus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmrWb16000Hz => "amr-wb-16000hz",
            Self::Audio16Khz16Bit32KbpsMonoOpus => "audio-16khz-16bit-32kbps-mono-opus",
            Self::Audio16Khz32KBitRateMonoMp3 => "audio-16khz-32kbitrate-mono-mp3",
            Self::Audio16Khz64KBitRateMonoMp3 => "audio-16khz-64kbitrate-mono-mp3",
            Self::Audio16Khz128KBitRateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            Self::Audio24Khz16Bit24KbpsMonoOpus => "audio-24khz-16bit-24kbps-mono-opus",
            Self::Audio24Khz16Bit48KbpsMonoOpus => "audio-24khz-16bit-48kbps-mono-opus",
            Self::Audio24Khz48KBitRateMonoMp3 => "audio-24khz-48kbitrate-mono-mp3",
            Self::Audio24Khz96KBitRateMonoMp3 => "audio-24khz-96kbitrate-mono-mp3",
            Self::Audio24Khz160KBitRateMonoMp3 => "audio-24khz-160kbitrate-mono-mp3",
            Self::Audio48Khz96KBitRateMonoMp3 => "audio-48khz-96kbitrate-mono-mp3",
            Self::Audio48Khz192KBitRateMonoMp3 => "audio-48khz-192kbitrate-mono-mp3",
            Self::Ogg16Khz16BitMonoOpus => "ogg-16khz-16bit-mono-opus",
            Self::Ogg24Khz16BitMonoOpus => "ogg-24khz-16bit-mono-opus",
            Self::Ogg48Khz16BitMonoOpus => "ogg-48khz-16bit-mono-opus",
            Self::Raw8Khz8BitMonoALaw => "raw-8khz-8bit-mono-alaw",
            Self::Raw8Khz8BitMonoMuLaw => "raw-8khz-8bit-mono-mulaw",
            Self::Raw8Khz16BitMonoPcm => "raw-8khz-16bit-mono-pcm",
            Self::Raw16Khz16BitMonoPcm => "raw-16khz-16bit-mono-pcm",
            Self::Raw16Khz16BitMonoTrueSilk => "raw-16khz-16bit-mono-truesilk",
            Self::Raw22050Hz16BitMonoPcm => "raw-22050hz-16bit-mono-pcm",
            Self::Raw24Khz16BitMonoPcm => "raw-24khz-16bit-mono-pcm",
            Self::Raw24Khz16BitMonoTrueSilk => "raw-24khz-16bit-mono-truesilk",
            Self::Raw44100Hz16BitMonoPcm => "raw-44100hz-16bit-mono-pcm",
            Self::Raw48Khz16BitMonoPcm => "raw-48khz-16bit-mono-pcm",
            Self::Webm16Khz16BitMonoOpus => "webm-16khz-16bit-mono-opus",
            Self::Webm24Khz16Bit24KbpsMonoOpus => "webm-24khz-16bit-24kbps-mono-opus",
            Self::Webm24Khz16BitMonoOpus => "webm-24khz-16bit-mono-opus",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| format!("unknown output format: {}", s))
    }
}

impl Serialize for OutputFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
