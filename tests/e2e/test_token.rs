use crate::helpers::{TestContext, SYNTHESIS_PATH, TEST_KEY, TOKEN_PATH};

use cognitive_tts::{Gender, OutputFormat, SpeakDocument, SpeechError, SynthesisApi};
use futures::future::join_all;
use test_context::test_context;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn document() -> SpeakDocument {
    SpeakDocument::new("en-US", "en-US-AvaNeural", Gender::Female, "Token test")
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fetch_the_token_once_for_concurrent_calls(ctx: &mut TestContext) {
    ctx.mount_token().await;
    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"audio".to_vec()))
        .expect(5)
        .mount(&ctx.server)
        .await;

    let synthesis = ctx.client.synthesis();
    let doc = document();
    let calls = (0..5).map(|_| synthesis.synthesize(OutputFormat::default(), &doc));
    for result in join_all(calls).await {
        result.unwrap().close();
    }

    assert_eq!(
        ctx.client.tokens().cached_token(),
        Some(crate::helpers::TEST_TOKEN)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_with_authentication_error_on_rejected_key(ctx: &mut TestContext) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("Ocp-Apim-Subscription-Key", TEST_KEY))
        .respond_with(ResponseTemplate::new(401).set_body_string("Access denied due to invalid subscription key."))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .synthesis()
        .synthesize(OutputFormat::default(), &document())
        .await
        .unwrap_err();

    match err {
        SpeechError::Authentication { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert!(message.contains("invalid subscription key"));
        }
        other => panic!("expected authentication error, got {other:?}"),
    }
    assert_eq!(ctx.client.tokens().cached_token(), None);
}
