use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use namegate_domain::DomainError;
use serde_json::json;
use tracing::{error, warn};

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(DomainError::InvalidRequest(rejection.body_text()))
    }
}

impl ApiError {
    /// HTTP status and the message shown to the client.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            DomainError::InvalidRequest(_) | DomainError::MalformedEncoding(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::SignatureInvalid(_) => (StatusCode::UNAUTHORIZED, self.0.to_string()),

            DomainError::InsufficientSenderBalance(_) | DomainError::InsufficientAllowance(_) => {
                (StatusCode::PAYMENT_REQUIRED, self.0.to_string())
            }

            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::NameUnavailable(_) | DomainError::NonceConflict(_) => {
                (StatusCode::CONFLICT, self.0.to_string())
            }

            DomainError::ResolutionFailed(_) | DomainError::GatewayUnreachable(_) => {
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }

            DomainError::ChainUnavailable(_) | DomainError::InsufficientRelayerGas(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string())
            }

            DomainError::SigningFailed(_)
            | DomainError::TransactionReverted(_)
            | DomainError::Unknown(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),

            DomainError::DatabaseError(_) | DomainError::ConfigError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        self.log(status);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Relay failures carry `success: false` and whether the client may resubmit
/// the same authorization.
pub struct RelayError(pub ApiError);

impl From<DomainError> for RelayError {
    fn from(err: DomainError) -> Self {
        Self(ApiError(err))
    }
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ApiError::from(rejection))
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        self.0.log(status);
        let body = json!({
            "error": message,
            "success": false,
            "retryable": self.0 .0.is_retryable(),
        });
        (status, Json(body)).into_response()
    }
}
