//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Map this error code to an HTTP status code
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            // 404 Not Found
            ErrorCode::NotFound | ErrorCode::BranchNotFound | ErrorCode::StudentNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            ErrorCode::AlreadyExists | ErrorCode::BranchHasStudents => StatusCode::CONFLICT,

            // 401 Unauthorized
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            ErrorCode::PermissionDenied | ErrorCode::RoleRequired | ErrorCode::StaffRequired => {
                StatusCode::FORBIDDEN
            }

            // 500 Internal Server Error
            ErrorCode::InternalError | ErrorCode::DatabaseError | ErrorCode::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // Remaining codes are client-side input problems
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_statuses() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::BranchNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::StudentNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_statuses() {
        assert_eq!(ErrorCode::AlreadyExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::BranchHasStudents.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(ErrorCode::NotAuthenticated.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::TokenExpired.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::StaffRequired.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_statuses() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::BranchNameRequired.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::StudentFeeNegative.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::StudentIdInvalid.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_system_statuses() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
