//! Student Repository
//!
//! Every read joins the owning branch so responses can carry `branchName`
//! without a second query.

use shared::models::{StudentCreate, StudentUpdate, StudentWithBranch};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const SELECT_STUDENT: &str = "SELECT s.id, s.branch_id, s.name, s.address, s.father_name, s.mother_name, s.aadhar_number, s.phone_number, s.profile_image_url, s.aadhar_image_url, s.religion, s.food_preference, s.gender, s.fee, s.created_at, s.updated_at, b.name AS branch_name FROM students s JOIN branches b ON b.id = s.branch_id";

/// List students sorted by name, optionally restricted to one branch.
pub async fn find_all(
    pool: &SqlitePool,
    branch_id: Option<i64>,
) -> RepoResult<Vec<StudentWithBranch>> {
    let students = match branch_id {
        Some(branch_id) => {
            sqlx::query_as::<_, StudentWithBranch>(&format!(
                "{} WHERE s.branch_id = ? ORDER BY s.name ASC",
                SELECT_STUDENT
            ))
            .bind(branch_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, StudentWithBranch>(&format!(
                "{} ORDER BY s.name ASC",
                SELECT_STUDENT
            ))
            .fetch_all(pool)
            .await?
        }
    };

    Ok(students)
}

/// Fetch a single student with their branch name.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<StudentWithBranch>> {
    let student = sqlx::query_as::<_, StudentWithBranch>(&format!(
        "{} WHERE s.id = ?",
        SELECT_STUDENT
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

/// Foreign-key check that reports a validation error instead of a driver error.
async fn ensure_branch_exists(pool: &SqlitePool, branch_id: i64) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM branches WHERE id = ?")
        .bind(branch_id)
        .fetch_one(pool)
        .await?;

    if count == 0 {
        return Err(RepoError::Validation(format!(
            "Branch {branch_id} does not exist"
        )));
    }

    Ok(())
}

/// Insert a student into a branch. Missing fee defaults to 0.
pub async fn create(
    pool: &SqlitePool,
    branch_id: i64,
    name: &str,
    data: &StudentCreate,
) -> RepoResult<StudentWithBranch> {
    ensure_branch_exists(pool, branch_id).await?;

    let now = now_millis();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO students (branch_id, name, address, father_name, mother_name, aadhar_number, phone_number, profile_image_url, aadhar_image_url, religion, food_preference, gender, fee, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(branch_id)
    .bind(name)
    .bind(&data.address)
    .bind(&data.father_name)
    .bind(&data.mother_name)
    .bind(&data.aadhar_number)
    .bind(&data.phone_number)
    .bind(&data.profile_image_url)
    .bind(&data.aadhar_image_url)
    .bind(&data.religion)
    .bind(&data.food_preference)
    .bind(&data.gender)
    .bind(data.fee.unwrap_or(0.0))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create student".into()))
}

/// Merge a partial payload into the stored row.
///
/// Fields absent from the payload keep their stored values; `created_at`
/// never changes, `updated_at` always does.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &StudentUpdate,
) -> RepoResult<StudentWithBranch> {
    let Some(current) = find_by_id(pool, id).await? else {
        return Err(RepoError::NotFound(format!("Student {id} not found")));
    };

    if let Some(target) = data.branch_id {
        ensure_branch_exists(pool, target).await?;
    }

    let current = current.student;
    let branch_id = data.branch_id.unwrap_or(current.branch_id);
    let name = match &data.name {
        Some(name) => name.trim().to_string(),
        None => current.name,
    };
    let fee = data.fee.unwrap_or(current.fee);

    sqlx::query(
        "UPDATE students SET branch_id = ?, name = ?, address = ?, father_name = ?, mother_name = ?, aadhar_number = ?, phone_number = ?, profile_image_url = ?, aadhar_image_url = ?, religion = ?, food_preference = ?, gender = ?, fee = ?, updated_at = ? WHERE id = ?",
    )
    .bind(branch_id)
    .bind(&name)
    .bind(data.address.clone().or(current.address))
    .bind(data.father_name.clone().or(current.father_name))
    .bind(data.mother_name.clone().or(current.mother_name))
    .bind(data.aadhar_number.clone().or(current.aadhar_number))
    .bind(data.phone_number.clone().or(current.phone_number))
    .bind(data.profile_image_url.clone().or(current.profile_image_url))
    .bind(data.aadhar_image_url.clone().or(current.aadhar_image_url))
    .bind(data.religion.clone().or(current.religion))
    .bind(data.food_preference.clone().or(current.food_preference))
    .bind(data.gender.clone().or(current.gender))
    .bind(fee)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to reload student".into()))
}

/// Delete a student.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Student {id} not found")));
    }

    Ok(true)
}
