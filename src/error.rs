use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::{error, warn};

use crate::schemas::ErrorDetail;

/// Errors surfaced to HTTP clients.
///
/// The service has exactly one domain error: an id-keyed lookup that finds
/// nothing. Everything else — connectivity loss, constraint violations —
/// is a store failure and maps to a bare 500 without detail leakage.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Any database failure, including unique-constraint violations.
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(entity) => {
                warn!("{} lookup failed: not found", entity);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDetail {
                        detail: format!("{entity} not found"),
                    }),
                )
                    .into_response()
            }
            ApiError::Database(db_error) => {
                error!("database error: {}", db_error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDetail {
                        detail: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
