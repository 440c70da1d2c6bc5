use cognitive_tts::infrastructure::endpoints::SUBSCRIPTION_KEY_HEADER;
use cognitive_tts::{SpeechClient, SpeechClientBuilder};
use test_context::AsyncTestContext;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};


pub const TEST_KEY: &str = "e2e-subscription-key";
pub const TEST_TOKEN: &str = "e2e-bearer-token";
pub const TOKEN_PATH: &str = "/sts/v1.0/issueToken";
pub const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";
pub const VOICES_PATH: &str = "/cognitiveservices/voices/list";
pub const BATCH_PATH: &str = "/api/texttospeech/3.1-preview1/batchsynthesis";

pub struct TestContext {
    pub server: MockServer,
    pub client: SpeechClient,
}

impl TestContext {
    /// Builder pointed at this context's server, for tests that need other settings
    pub fn builder(&self) -> SpeechClientBuilder {
        SpeechClient::builder()
            .subscription_key(TEST_KEY)
            .region("eastus")
            .endpoint_base_url(self.server.uri())
    }

    /// Issue `TEST_TOKEN`, exactly once
    pub async fn mount_token(&self) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .and(header(SUBSCRIPTION_KEY_HEADER, TEST_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_string(TEST_TOKEN))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let server = MockServer::start().await;
            let client = SpeechClient::builder()
                .subscription_key(TEST_KEY)
                .region("eastus")
                .endpoint_base_url(server.uri())
                .build()
                .expect("Failed to build client");

            Self { server, client }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Mock expectations are verified when the server drops
        }
    }
}
