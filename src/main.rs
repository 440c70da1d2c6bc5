use cognitive_tts::domain::batch::BatchSynthesisApi;
use cognitive_tts::domain::voices::VoiceCatalogApi;
use cognitive_tts::infrastructure::config::{Config, LogFormat};
use cognitive_tts::SpeechClientBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const JOB_PAGE_SIZE: u32 = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(region = %config.speech_region, "Starting speech client");

    let client = SpeechClientBuilder::from_config(&config).build()?;

    let voices = client.voices().list_voices().await?;
    tracing::info!(count = voices.len(), "Voices available in region");

    let jobs = client.batch().list(0, JOB_PAGE_SIZE).await?;
    tracing::info!(count = jobs.len(), "Batch synthesis jobs");
    for job in &jobs {
        tracing::info!(
            job_id = %job.id,
            status = %job.status,
            display_name = %job.display_name,
            result = job.result_url().unwrap_or("-"),
            "Batch job"
        );
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cognitive_tts=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
