pub mod error_dto;
pub mod response;

pub use error_dto::ServiceErrorBody;
pub use response::{read_json, status_error};
