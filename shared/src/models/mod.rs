//! Data Models
//!
//! Hostel domain models: branches (buildings) and the students assigned to
//! them. All models serialize in camelCase to match the JSON wire contract.

pub mod branch;
pub mod student;

pub use branch::{Branch, BranchCreate, BranchUpdate, BranchWithCount};
pub use student::{Student, StudentCreate, StudentUpdate, StudentWithBranch};
