//! Branch Repository

use shared::models::BranchWithCount;
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const SELECT_WITH_COUNT: &str = "SELECT b.id, b.name, COUNT(s.id) AS student_count, b.created_at, b.updated_at FROM branches b LEFT JOIN students s ON s.branch_id = b.id";

/// List all branches with their derived student counts, in insertion order.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<BranchWithCount>> {
    let branches = sqlx::query_as::<_, BranchWithCount>(&format!(
        "{} GROUP BY b.id ORDER BY b.id",
        SELECT_WITH_COUNT
    ))
    .fetch_all(pool)
    .await?;

    Ok(branches)
}

/// Fetch a single branch with its student count.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<BranchWithCount>> {
    let branch = sqlx::query_as::<_, BranchWithCount>(&format!(
        "{} WHERE b.id = ? GROUP BY b.id",
        SELECT_WITH_COUNT
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(branch)
}

/// Insert a branch and return it with its (zero) student count.
pub async fn create(pool: &SqlitePool, name: &str) -> RepoResult<BranchWithCount> {
    let now = now_millis();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO branches (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create branch".into()))
}

/// Rename a branch, refreshing its updated_at timestamp.
pub async fn update(pool: &SqlitePool, id: i64, name: &str) -> RepoResult<BranchWithCount> {
    let result = sqlx::query("UPDATE branches SET name = ?, updated_at = ? WHERE id = ?")
        .bind(name)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Branch {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to reload branch".into()))
}

/// Delete a branch. Only branches without students can be deleted.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    // Check for assigned students
    let students: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE branch_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;

    if students > 0 {
        return Err(RepoError::Validation(format!(
            "Cannot delete branch with {students} students"
        )));
    }

    let result = sqlx::query("DELETE FROM branches WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Branch {id} not found")));
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Create an in-memory SQLite pool with the required schema for branch tests.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE branches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            "CREATE TABLE students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                branch_id INTEGER NOT NULL REFERENCES branches(id),
                name TEXT NOT NULL,
                fee REAL NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();

        pool
    }

    #[tokio::test]
    async fn test_create_starts_with_zero_students() {
        let pool = test_pool().await;

        let branch = create(&pool, "North Wing").await.unwrap();
        assert_eq!(branch.name, "North Wing");
        assert_eq!(branch.student_count, 0);
        assert!(branch.created_at > 0);
        assert_eq!(branch.created_at, branch.updated_at);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let pool = test_pool().await;
        create(&pool, "North Wing").await.unwrap();
        create(&pool, "Annex").await.unwrap();

        let branches = find_all(&pool).await.unwrap();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].name, "North Wing");
        assert_eq!(branches[1].name, "Annex");
    }

    #[tokio::test]
    async fn test_count_reflects_students() {
        let pool = test_pool().await;
        let branch = create(&pool, "North Wing").await.unwrap();

        // Seed: two students in the branch
        sqlx::query("INSERT INTO students (branch_id, name, created_at, updated_at) VALUES (?, 'Asha', 0, 0), (?, 'Meena', 0, 0)")
            .bind(branch.id)
            .bind(branch.id)
            .execute(&pool)
            .await
            .unwrap();

        let reloaded = find_by_id(&pool, branch.id).await.unwrap().unwrap();
        assert_eq!(reloaded.student_count, 2);
    }

    #[tokio::test]
    async fn test_update_renames() {
        let pool = test_pool().await;
        let branch = create(&pool, "North Wing").await.unwrap();

        let renamed = update(&pool, branch.id, "East Wing").await.unwrap();
        assert_eq!(renamed.name, "East Wing");
        assert!(renamed.updated_at >= branch.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_branch() {
        let pool = test_pool().await;
        let err = update(&pool, 999, "Ghost").await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_guards_on_students() {
        let pool = test_pool().await;
        let branch = create(&pool, "North Wing").await.unwrap();

        sqlx::query("INSERT INTO students (branch_id, name, created_at, updated_at) VALUES (?, 'Asha', 0, 0)")
            .bind(branch.id)
            .execute(&pool)
            .await
            .unwrap();

        let err = delete(&pool, branch.id).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // Branch survives the rejected delete
        assert!(find_by_id(&pool, branch.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_empty_branch() {
        let pool = test_pool().await;
        let branch = create(&pool, "North Wing").await.unwrap();

        assert!(delete(&pool, branch.id).await.unwrap());
        assert!(find_by_id(&pool, branch.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_branch() {
        let pool = test_pool().await;
        let err = delete(&pool, 42).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
