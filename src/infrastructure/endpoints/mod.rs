//! Regional endpoint URLs for the speech service.
//!
//! Each region exposes three hosts:
//!
//! - `{region}.api.cognitive.microsoft.com` for token issuance
//! - `{region}.tts.speech.microsoft.com` for the voice list and short-form synthesis
//! - `{region}.customvoice.api.speech.microsoft.com` for batch synthesis

/// Header carrying the subscription key
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
/// Header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Header selecting the audio encoding of a synthesis response
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_SSML: &str = "application/ssml+xml";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Batch synthesis API version used unless configured otherwise
pub const DEFAULT_BATCH_API_VERSION: &str = "3.1-preview1";

const TOKEN_PATH: &str = "/sts/v1.0/issueToken";
const VOICES_LIST_PATH: &str = "/cognitiveservices/voices/list";
const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";

/// Resolved URLs for every operation family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub voices_list_url: String,
    pub synthesis_url: String,
    pub batch_url: String,
}

impl Endpoints {
    pub fn for_region(region: &str, batch_api_version: &str) -> Self {
        let region = region.trim().to_lowercase();
        Self {
            token_url: format!("https://{}.api.cognitive.microsoft.com{}", region, TOKEN_PATH),
            voices_list_url: format!(
                "https://{}.tts.speech.microsoft.com{}",
                region, VOICES_LIST_PATH
            ),
            synthesis_url: format!(
                "https://{}.tts.speech.microsoft.com{}",
                region, SYNTHESIS_PATH
            ),
            batch_url: format!(
                "https://{}.customvoice.api.speech.microsoft.com{}",
                region,
                batch_path(batch_api_version)
            ),
        }
    }

    /// Every family under a single base URL, keeping the service paths.
    /// Used for proxies and local mock servers.
    pub fn from_base_url(base_url: &str, batch_api_version: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            token_url: format!("{}{}", base, TOKEN_PATH),
            voices_list_url: format!("{}{}", base, VOICES_LIST_PATH),
            synthesis_url: format!("{}{}", base, SYNTHESIS_PATH),
            batch_url: format!("{}{}", base, batch_path(batch_api_version)),
        }
    }

    /// URL of a single batch job. The id is appended exactly as given.
    pub fn batch_job_url(&self, id: &str) -> String {
        format!("{}/{}", self.batch_url, id)
    }

    pub fn batch_list_url(&self, skip: u32, top: u32) -> String {
        format!("{}?skip={}&top={}", self.batch_url, skip, top)
    }
}

fn batch_path(version: &str) -> String {
    format!("/api/texttospeech/{}/batchsynthesis", version)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
