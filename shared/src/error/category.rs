//! Error categories
//!
//! Categories are derived from the numeric range of an [`ErrorCode`], so new
//! codes land in the right category without extra bookkeeping.

use super::codes::ErrorCode;

/// High-level grouping of error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Code 0
    Success,
    /// Codes 1-999
    General,
    /// Codes 1000-1999
    Auth,
    /// Codes 2000-2999
    Permission,
    /// Codes 4000-4999
    Branch,
    /// Codes 5000-5999
    Student,
    /// Codes 9000-9999
    System,
}

impl ErrorCategory {
    /// Category name for logging and diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCategory::Success => "success",
            ErrorCategory::General => "general",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Permission => "permission",
            ErrorCategory::Branch => "branch",
            ErrorCategory::Student => "student",
            ErrorCategory::System => "system",
        }
    }
}

impl ErrorCode {
    /// Derive the category from the numeric range
    pub const fn category(&self) -> ErrorCategory {
        match self.code() {
            0 => ErrorCategory::Success,
            1..1000 => ErrorCategory::General,
            1000..2000 => ErrorCategory::Auth,
            2000..3000 => ErrorCategory::Permission,
            4000..5000 => ErrorCategory::Branch,
            5000..6000 => ErrorCategory::Student,
            9000..10000 => ErrorCategory::System,
            _ => ErrorCategory::General,
        }
    }
}
