pub mod service;
pub mod stream;

pub use service::{SynthesisApi, SynthesisClient, SYNTHESIS_TIMEOUT, WRITE_CHUNK_SIZE};
pub use stream::AudioStream;
