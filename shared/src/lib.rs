//! Shared workspace library
//!
//! Common types used across the hostel management workspace:
//!
//! - [`error`] - unified error codes, [`AppError`] and the [`ApiResponse`] envelope
//! - [`models`] - branch and student data models
//! - [`util`] - small helpers (millisecond timestamps)

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Branch, BranchCreate, BranchUpdate, BranchWithCount};
pub use models::{Student, StudentCreate, StudentUpdate, StudentWithBranch};
pub use util::now_millis;
