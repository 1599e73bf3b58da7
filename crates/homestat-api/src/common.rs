// Shared helpers for route handlers
//
// All handlers map core errors through error_status so the transport mapping
// exists in exactly one place. Store failures are logged in full here and
// surfaced to clients as a bare 500.

use axum::http::StatusCode;
use homestat_core::AuthError;

/// Map a core error to its transport status code
pub fn error_status(context: &str, e: AuthError) -> StatusCode {
    match e {
        AuthError::Validation(_) => StatusCode::BAD_REQUEST,
        AuthError::DuplicateUser => StatusCode::CONFLICT,
        AuthError::InvalidCredentials
        | AuthError::MissingCredential
        | AuthError::InvalidCredential => StatusCode::UNAUTHORIZED,
        AuthError::Store(msg) => {
            tracing::error!("{}: store error: {}", context, msg);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            error_status("t", AuthError::validation("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status("t", AuthError::DuplicateUser),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_status("t", AuthError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            error_status("t", AuthError::MissingCredential),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            error_status("t", AuthError::InvalidCredential),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            error_status("t", AuthError::store("down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
