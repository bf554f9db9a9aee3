//! Student API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::AppJson;
use crate::core::ServerState;
use crate::db::repository::{RepoError, student};
use crate::utils::validation::parse_id;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{StudentCreate, StudentUpdate, StudentWithBranch};

/// 学生列表响应
#[derive(Serialize)]
pub struct StudentList {
    students: Vec<StudentWithBranch>,
}

/// 单个学生响应
#[derive(Serialize)]
pub struct StudentDetail {
    student: StudentWithBranch,
}

/// 删除确认响应
#[derive(Serialize)]
pub struct DeleteConfirmation {
    message: &'static str,
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// 按楼栋过滤 (可选)
    branch_id: Option<String>,
}

/// GET /api/students - 获取所有学生 (可按楼栋过滤)
pub async fn get_all(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<StudentList>> {
    let branch_id = match query.branch_id.as_deref() {
        Some(raw) => Some(parse_id(raw, ErrorCode::BranchIdInvalid)?),
        None => None,
    };

    let students = student::find_all(&state.pool, branch_id).await?;
    Ok(Json(StudentList { students }))
}

/// GET /api/students/:id - 获取单个学生
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StudentDetail>> {
    let id = parse_id(&id, ErrorCode::StudentIdInvalid)?;

    let found = student::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::StudentNotFound, format!("Student {id} not found"))
    })?;

    Ok(Json(StudentDetail { student: found }))
}

/// POST /api/students - 录入学生
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<StudentCreate>,
) -> AppResult<(StatusCode, Json<StudentDetail>)> {
    let Some(branch_id) = payload.branch_id else {
        return Err(AppError::new(ErrorCode::StudentBranchRequired));
    };

    let name = payload
        .name
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();
    if name.is_empty() {
        return Err(AppError::new(ErrorCode::StudentNameRequired));
    }

    if let Some(fee) = payload.fee
        && fee < 0.0
    {
        return Err(AppError::new(ErrorCode::StudentFeeNegative));
    }

    let created = student::create(&state.pool, branch_id, &name, &payload).await?;
    Ok((StatusCode::CREATED, Json(StudentDetail { student: created })))
}

/// PUT /api/students/:id - 更新学生 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<StudentUpdate>,
) -> AppResult<Json<StudentDetail>> {
    let id = parse_id(&id, ErrorCode::StudentIdInvalid)?;

    if let Some(name) = payload.name.as_deref()
        && name.trim().is_empty()
    {
        return Err(AppError::new(ErrorCode::StudentNameRequired));
    }

    if let Some(fee) = payload.fee
        && fee < 0.0
    {
        return Err(AppError::new(ErrorCode::StudentFeeNegative));
    }

    let updated = match student::update(&state.pool, id, &payload).await {
        Ok(updated) => updated,
        Err(RepoError::NotFound(msg)) => {
            return Err(AppError::with_message(ErrorCode::StudentNotFound, msg));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(StudentDetail { student: updated }))
}

/// DELETE /api/students/:id - 删除学生
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteConfirmation>> {
    let id = parse_id(&id, ErrorCode::StudentIdInvalid)?;

    match student::delete(&state.pool, id).await {
        Ok(_) => Ok(Json(DeleteConfirmation {
            message: "Student deleted successfully",
        })),
        Err(RepoError::NotFound(msg)) => {
            Err(AppError::with_message(ErrorCode::StudentNotFound, msg))
        }
        Err(e) => Err(e.into()),
    }
}
