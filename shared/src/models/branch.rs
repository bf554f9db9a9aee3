//! Branch Model
//!
//! `studentCount` is derived at read time from the students table and lives
//! on the [`BranchWithCount`] view, never in a stored column.

use serde::{Deserialize, Serialize};

/// Branch entity (宿舍楼栋)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Branch {
    /// Store-generated identifier
    pub id: i64,
    /// Display name, non-empty
    pub name: String,
    /// Creation timestamp (milliseconds since epoch)
    pub created_at: i64,
    /// Last update timestamp (milliseconds since epoch)
    pub updated_at: i64,
}

/// Branch row annotated with its derived student count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BranchWithCount {
    pub id: i64,
    pub name: String,
    /// Number of students assigned to this branch (0 for empty branches)
    pub student_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload for creating a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCreate {
    pub name: String,
}

/// Payload for renaming a branch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchUpdate {
    pub name: Option<String>,
}
