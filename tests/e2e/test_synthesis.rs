use crate::helpers::assertions::{assert_http_status, last_speak_document};
use crate::helpers::{TestContext, SYNTHESIS_PATH, TEST_KEY, TEST_TOKEN};

use cognitive_tts::{Gender, Operation, OutputFormat, SpeakDocument, SpeechError, SynthesisApi};
use futures::StreamExt;
use test_context::test_context;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

async fn mount_audio(ctx: &TestContext, format: OutputFormat, audio: Vec<u8>) {
    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .and(header("Ocp-Apim-Subscription-Key", TEST_KEY))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("X-Microsoft-OutputFormat", format.as_str()))
        .and(header("Content-Type", "application/ssml+xml"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio))
        .expect(1)
        .mount(&ctx.server)
        .await;
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stream_synthesized_audio(ctx: &mut TestContext) {
    ctx.mount_token().await;
    let audio: Vec<u8> = (0..20_000u32).map(|i| (i % 256) as u8).collect();
    mount_audio(ctx, OutputFormat::Audio24Khz96KBitRateMonoMp3, audio.clone()).await;

    let document = SpeakDocument::new("en-US", "en-US-AvaNeural", Gender::Female, "Good morning");
    let mut stream = ctx
        .client
        .synthesis()
        .synthesize(OutputFormat::Audio24Khz96KBitRateMonoMp3, &document)
        .await
        .unwrap();

    let mut received = Vec::new();
    while let Some(chunk) = stream.next().await {
        received.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(received, audio);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_escaped_ssml_that_round_trips(ctx: &mut TestContext) {
    ctx.mount_token().await;
    mount_audio(ctx, OutputFormat::default(), b"audio".to_vec()).await;

    let text = "中华兴盛 & <friends>";
    let document = SpeakDocument::new("zh-CN", "zh-CN-YunxiNeural", Gender::Male, text);
    ctx.client
        .synthesis()
        .synthesize(OutputFormat::default(), &document)
        .await
        .unwrap()
        .close();

    let received = last_speak_document(&ctx.server).await;
    assert_eq!(received.lang, "zh-CN");
    assert_eq!(received.gender, "Male");
    assert_eq!(received.voice, "zh-CN-YunxiNeural");
    assert_eq!(received.text, text);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_empty_audio_body(ctx: &mut TestContext) {
    ctx.mount_token().await;
    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&ctx.server)
        .await;

    let document = SpeakDocument::new("en-US", "en-US-AvaNeural", Gender::Female, "...");
    let err = ctx
        .client
        .synthesis()
        .synthesize(OutputFormat::default(), &document)
        .await
        .unwrap_err();

    assert!(matches!(err, SpeechError::EmptyResponse(Operation::Synthesize)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_the_status_of_a_rejected_synthesis(ctx: &mut TestContext) {
    ctx.mount_token().await;
    Mock::given(method("POST"))
        .and(path(SYNTHESIS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
        .mount(&ctx.server)
        .await;

    let document = SpeakDocument::new("en-US", "en-US-AvaNeural", Gender::Female, "Hello");
    let err = ctx
        .client
        .synthesis()
        .synthesize(OutputFormat::default(), &document)
        .await
        .unwrap_err();

    assert_http_status(&err, Operation::Synthesize, 429);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_write_audio_into_a_file(ctx: &mut TestContext) {
    ctx.mount_token().await;
    let audio: Vec<u8> = (0..9_000u32).map(|i| (i % 200) as u8).collect();
    mount_audio(ctx, OutputFormat::Raw16Khz16BitMonoPcm, audio.clone()).await;

    let target = std::env::temp_dir().join(format!("cognitive-tts-e2e-{}.pcm", std::process::id()));
    let mut file = tokio::fs::File::create(&target).await.unwrap();

    let document = SpeakDocument::new("en-US", "en-US-AvaNeural", Gender::Female, "Write me");
    let written = ctx
        .client
        .synthesis()
        .synthesize_to_writer(OutputFormat::Raw16Khz16BitMonoPcm, &document, &mut file)
        .await
        .unwrap();
    drop(file);

    assert_eq!(written, audio.len() as u64);
    assert_eq!(tokio::fs::read(&target).await.unwrap(), audio);
    tokio::fs::remove_file(&target).await.unwrap();
}
