//! Client for the Azure-style cognitive speech service: short-form synthesis,
//! the regional voice catalog and long-form batch synthesis jobs.

pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use client::{SpeechClient, SpeechClientBuilder};
pub use domain::batch::{
    BatchInputs, BatchJobFlags, BatchJobHandle, BatchJobSpec, BatchJobStatus, BatchSynthesisApi,
    JobStatus,
};
pub use domain::ssml::{Gender, OutputFormat, SpeakDocument, SsmlInput, SynthesisRequest};
pub use domain::synthesis::{AudioStream, SynthesisApi};
pub use domain::voices::{VoiceCatalogApi, VoiceDescriptor};
pub use error::{Operation, SpeechError, SpeechResult};
pub use infrastructure::http::{ReqwestTransport, Transport};
