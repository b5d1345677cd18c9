use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::InteractionError;
use crate::models::ErrorResponse;
use crate::services::StoreError;

/// Error surface of the HTTP layer. Every handler returns this; the
/// `ResponseError` impl turns it into the JSON error body used everywhere.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::NotFound(_) => "not_found",
            ApiError::Unauthorized => "unauthorized",
            ApiError::Store(_) => "internal_error",
        }
    }
}

impl From<InteractionError> for ApiError {
    fn from(err: InteractionError) -> Self {
        match err {
            // Target-not-found is a request error about a resource; the
            // source's own eligibility is a plain client fault.
            InteractionError::TargetNotFound => ApiError::NotFound(err.to_string()),
            InteractionError::SelfInteraction | InteractionError::SourceNotEligible => {
                ApiError::Validation(err.to_string())
            }
            InteractionError::Store(e) => ApiError::Store(e),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Store(e) = self {
            tracing::error!("data layer failure: {}", e);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InteractionError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_target_not_found_maps_to_404() {
        let api: ApiError = InteractionError::TargetNotFound.into();
        assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_self_interaction_maps_to_400() {
        let api: ApiError = InteractionError::SelfInteraction.into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
    }
}
