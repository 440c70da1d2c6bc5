pub mod auth;
pub mod batch;
pub mod shared;
pub mod ssml;
pub mod synthesis;
pub mod voices;
