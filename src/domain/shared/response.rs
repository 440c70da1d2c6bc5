use serde::de::DeserializeOwned;

use super::error_dto::ServiceErrorBody;
use crate::error::{Operation, SpeechError, SpeechResult};
use crate::infrastructure::http::TransportResponse;

/// Read a JSON body. Body read failures surface as transport errors.
pub async fn read_json<T: DeserializeOwned>(
    operation: Operation,
    response: TransportResponse,
) -> SpeechResult<T> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(SpeechError::EmptyResponse(operation));
    }

    serde_json::from_slice(&bytes).map_err(|source| {
        tracing::error!(
            operation = %operation,
            error = %source,
            body_size = bytes.len(),
            "Failed to decode response body"
        );
        SpeechError::Decode { operation, source }
    })
}

/// Turn a response with an unaccepted status into an error, consuming its body
pub async fn status_error(operation: Operation, response: TransportResponse) -> SpeechError {
    let status = response.status;
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error body".to_string());
    let body = match ServiceErrorBody::parse(&body) {
        Some(error) => error.summary(),
        None => body,
    };

    tracing::warn!(
        operation = %operation,
        status = %status.as_u16(),
        "Unexpected response status"
    );

    SpeechError::http_status(operation, status, body)
}
