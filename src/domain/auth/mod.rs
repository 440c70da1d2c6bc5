pub mod credentials;
pub mod service;

pub use credentials::Credentials;
pub use service::TokenManager;
