use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::CoreError;

/// Message returned for every request body that cannot be parsed.
pub const INVALID_JSON: &str = "Invalid JSON format";

/// Message returned for internal failures that are not tied to a query.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error": "..."}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body is not valid JSON for the expected schema.
    #[error("Invalid JSON format")]
    InvalidJson,

    /// A failed database operation. `message` is what the client sees;
    /// `source` is only logged.
    #[error("{message}: {source}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter that tags a sqlx error with the fixed
    /// client-facing message for the operation.
    ///
    /// ```ignore
    /// TodoRepo::list(&state.pool)
    ///     .await
    ///     .map_err(AppError::database("Failed to fetch todos"))?;
    /// ```
    pub fn database(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Database { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- HTTP-specific errors ---
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, INVALID_JSON.to_string()),

            // --- Persistence errors ---
            AppError::Database { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
