//! Small shared helpers

use chrono::Utc;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// All stored timestamps (`createdAt` / `updatedAt`) use this resolution.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
