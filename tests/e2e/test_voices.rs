use crate::helpers::assertions::assert_http_status;
use crate::helpers::fixtures;
use crate::helpers::{TestContext, TEST_KEY, VOICES_PATH};

use cognitive_tts::{Operation, VoiceCatalogApi};
use test_context::test_context;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_the_voices_of_the_region(ctx: &mut TestContext) {
    Mock::given(method("GET"))
        .and(path(VOICES_PATH))
        .and(header("Ocp-Apim-Subscription-Key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::voice_list()))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let voices = ctx.client.voices().list_voices().await.unwrap();

    assert_eq!(voices.len(), 2);
    assert_eq!(voices[0].short_name, "en-US-AvaNeural");
    assert_eq!(voices[0].words_per_minute.as_deref(), Some("147"));
    assert_eq!(voices[1].locale, "de-DE");
    assert_eq!(voices[1].words_per_minute, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_repeat_lookups_from_the_cache(ctx: &mut TestContext) {
    Mock::given(method("GET"))
        .and(path(VOICES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::voice_list()))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = ctx.builder().voice_cache(true).build().unwrap();
    let voices = client.voices();

    let all = voices.list_voices().await.unwrap();
    let german = voices.voices_for_locale("de-DE").await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(german.len(), 1);
    assert_eq!(german[0].short_name, "de-DE-KatjaNeural");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_a_failed_voice_lookup(ctx: &mut TestContext) {
    Mock::given(method("GET"))
        .and(path(VOICES_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.voices().list_voices().await.unwrap_err();

    assert_http_status(&err, Operation::ListVoices, 503);
}
