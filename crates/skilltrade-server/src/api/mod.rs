pub mod auth;
pub mod match_requests;
pub mod matches;
pub mod response;
pub mod skills;
pub mod state;
pub mod users;

pub use response::ApiResponse;

use axum::http::StatusCode;
use skilltrade_core::CoreError;

/// Map a core error to its transport reply. Storage failures are logged here
/// and collapsed to a generic message.
pub(crate) fn error_reply(err: CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        CoreError::Reference(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        CoreError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        CoreError::Storage(source) => {
            tracing::error!(error = ?source, "storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}
