pub mod dto;
pub mod service;
pub mod status;

pub use dto::{BatchInput, BatchInputs, BatchJobFlags, BatchJobSpec, SynthesisConfig, TextType};
pub use service::{BatchJobClient, BatchSynthesisApi};
pub use status::{BatchJobHandle, BatchJobStatus, JobError, JobOutputs, JobProperties, JobStatus};
