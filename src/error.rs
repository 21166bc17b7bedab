use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A storage failure inside a request handler. `context` is the only part
    /// the client sees.
    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Wrap a storage error with the message reported to the client
    ///
    /// Meant for `map_err`: `store.query_top(n).await.map_err(AppError::query(ERR_...))`
    pub fn query(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Query { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::Query {
                context,
                ref source,
            } => {
                tracing::error!("{}: {:?}", context, source);
                context.to_string()
            }
            AppError::InvalidInput(msg) => msg,
        };

        let body = Json(json!({
            "success": false,
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let err = AppError::InvalidInput("Invalid username".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_query_error_keeps_context() {
        let err = AppError::query("Failed to fetch stats")(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Failed to fetch stats"));
    }

    #[test]
    fn test_query_error_response_is_internal() {
        let err = AppError::query("Failed to save score")(sqlx::Error::PoolClosed);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
