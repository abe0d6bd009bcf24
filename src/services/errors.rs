use crate::db::StoreError;
use crate::services::AuthError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Failure of a handler. The kind survives up to the HTTP boundary, where only
/// a generic message is rendered; the detail goes to the log.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl ServiceError {
    fn public_message(&self) -> &'static str {
        match self {
            Self::Auth(_) => "unauthorized access",
            Self::NotFound(_) => "not found",
            Self::Validation(_) => "invalid request",
            Self::Store(_) | Self::Signing(_) => "something went wrong",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Store(_) | Self::Signing(_) => tracing::error!("Request failed: {}", self),
            _ => tracing::debug!("Request rejected: {}", self),
        }

        HttpResponse::build(self.status_code()).json(json!({ "message": self.public_message() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body(error: ServiceError) -> serde_json::Value {
        let bytes = to_bytes(error.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn store_detail_is_not_leaked() {
        let error = ServiceError::Store(StoreError::Unexpected("secret host".to_string()));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, error.status_code());
        assert_eq!(json!({"message": "something went wrong"}), body(error).await);
    }

    #[tokio::test]
    async fn auth_failures_share_one_message() {
        for error in [AuthError::Missing, AuthError::Invalid] {
            let error = ServiceError::from(error);
            assert_eq!(StatusCode::UNAUTHORIZED, error.status_code());
            assert_eq!(json!({"message": "unauthorized access"}), body(error).await);
        }
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let error = ServiceError::Validation("id is not an ObjectId".to_string());
        assert_eq!(StatusCode::BAD_REQUEST, error.status_code());
    }
}
