//! Voice catalog of a region.

pub mod dto;
pub mod service;

pub use dto::VoiceDescriptor;
pub use service::{VoiceCatalog, VoiceCatalogApi};
