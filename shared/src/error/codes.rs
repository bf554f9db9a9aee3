//! Error code definitions
//!
//! All codes are `u16` values grouped by numeric range. The number is the
//! wire format: responses carry the code, never the variant name.

use serde::{Deserialize, Serialize};

/// Unified error code registry
///
/// | Range | Category |
/// |-------|----------|
/// | 0 | Success |
/// | 1-999 | General |
/// | 1000-1999 | Authentication |
/// | 2000-2999 | Permission |
/// | 4000-4999 | Branch |
/// | 5000-5999 | Student |
/// | 9000-9999 | System |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation succeeded
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Request validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Malformed or unprocessable request
    InvalidRequest = 5,
    /// A required field is missing
    RequiredField = 6,

    // ==================== 1xxx: Authentication ====================
    /// Not authenticated (missing credentials)
    NotAuthenticated = 1001,
    /// Invalid username or password
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// A specific role is required
    RoleRequired = 2002,
    /// Staff or admin role is required
    StaffRequired = 2003,

    // ==================== 4xxx: Branch ====================
    /// Branch not found
    BranchNotFound = 4001,
    /// Branch name is required
    BranchNameRequired = 4002,
    /// Branch still has students assigned
    BranchHasStudents = 4003,
    /// Branch id is not a valid identifier
    BranchIdInvalid = 4004,

    // ==================== 5xxx: Student ====================
    /// Student not found
    StudentNotFound = 5001,
    /// Student name is required
    StudentNameRequired = 5002,
    /// Student branch is required
    StudentBranchRequired = 5003,
    /// Student fee must not be negative
    StudentFeeNegative = 5004,
    /// Student id is not a valid identifier
    StudentIdInvalid = 5005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric error code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code represents success
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",

            ErrorCode::NotAuthenticated => "Not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Invalid token",

            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Role required",
            ErrorCode::StaffRequired => "Staff role required",

            ErrorCode::BranchNotFound => "Branch not found",
            ErrorCode::BranchNameRequired => "Branch name is required",
            ErrorCode::BranchHasStudents => "Branch still has students",
            ErrorCode::BranchIdInvalid => "Invalid branch id",

            ErrorCode::StudentNotFound => "Student not found",
            ErrorCode::StudentNameRequired => "Student name is required",
            ErrorCode::StudentBranchRequired => "Student branch is required",
            ErrorCode::StudentFeeNegative => "Student fee must not be negative",
            ErrorCode::StudentIdInvalid => "Invalid student id",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unknown numeric value to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl std::fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::StaffRequired),

            4001 => Ok(ErrorCode::BranchNotFound),
            4002 => Ok(ErrorCode::BranchNameRequired),
            4003 => Ok(ErrorCode::BranchHasStudents),
            4004 => Ok(ErrorCode::BranchIdInvalid),

            5001 => Ok(ErrorCode::StudentNotFound),
            5002 => Ok(ErrorCode::StudentNameRequired),
            5003 => Ok(ErrorCode::StudentBranchRequired),
            5004 => Ok(ErrorCode::StudentFeeNegative),
            5005 => Ok(ErrorCode::StudentIdInvalid),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
