//! Unified error handling system
//!
//! Every error carries a numeric [`ErrorCode`] organized by range:
//!
//! - `0xxx` - General errors
//! - `1xxx` - Authentication errors
//! - `2xxx` - Permission errors
//! - `4xxx` - Branch errors
//! - `5xxx` - Student errors
//! - `9xxx` - System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ApiResponse, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::BranchNameRequired, "Branch name is required");
//! assert_eq!(err.code.code(), 4002);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(4002));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
