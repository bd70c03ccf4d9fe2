//! HTTP mapping for relay errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chat_relay_types::{ErrorBody, RelayError};

/// Axum response wrapper: `{"error": <RelayError display>}` with the error's status.
#[derive(Debug)]
pub struct RelayErrorResponse(pub RelayError);

impl From<RelayError> for RelayErrorResponse {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RelayErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::warn!("Relay failed with {}: {}", status.as_u16(), self.0);
        } else {
            tracing::debug!("Relay rejected request with {}: {}", status.as_u16(), self.0);
        }

        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let response = RelayErrorResponse(RelayError::MethodNotAllowed).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = RelayErrorResponse(RelayError::Transport { message: "timeout".to_string() })
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
