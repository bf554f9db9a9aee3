//! Branch API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::api::AppJson;
use crate::core::ServerState;
use crate::db::repository::{RepoError, branch};
use crate::utils::validation::parse_id;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{BranchCreate, BranchUpdate, BranchWithCount};

/// 楼栋列表响应
#[derive(Serialize)]
pub struct BranchList {
    branches: Vec<BranchWithCount>,
}

/// 单个楼栋响应
#[derive(Serialize)]
pub struct BranchDetail {
    branch: BranchWithCount,
}

/// 删除确认响应
#[derive(Serialize)]
pub struct DeleteConfirmation {
    message: &'static str,
}

/// GET /api/branches - 获取所有楼栋 (含学生人数)
pub async fn get_all(State(state): State<ServerState>) -> AppResult<Json<BranchList>> {
    let branches = branch::find_all(&state.pool).await?;
    Ok(Json(BranchList { branches }))
}

/// POST /api/branches - 创建楼栋
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BranchCreate>,
) -> AppResult<(StatusCode, Json<BranchDetail>)> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::new(ErrorCode::BranchNameRequired));
    }

    let created = branch::create(&state.pool, name).await?;
    Ok((StatusCode::CREATED, Json(BranchDetail { branch: created })))
}

/// PUT /api/branches/:id - 重命名楼栋
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<BranchUpdate>,
) -> AppResult<Json<BranchDetail>> {
    let id = parse_id(&id, ErrorCode::BranchIdInvalid)?;

    let Some(name) = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
    else {
        return Err(AppError::new(ErrorCode::BranchNameRequired));
    };

    let updated = match branch::update(&state.pool, id, name).await {
        Ok(updated) => updated,
        Err(RepoError::NotFound(msg)) => {
            return Err(AppError::with_message(ErrorCode::BranchNotFound, msg));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(BranchDetail { branch: updated }))
}

/// DELETE /api/branches/:id - 删除楼栋
///
/// 仍有学生在住时拒绝删除 (409)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteConfirmation>> {
    let id = parse_id(&id, ErrorCode::BranchIdInvalid)?;

    match branch::delete(&state.pool, id).await {
        Ok(_) => Ok(Json(DeleteConfirmation {
            message: "Branch deleted successfully",
        })),
        Err(RepoError::NotFound(msg)) => {
            Err(AppError::with_message(ErrorCode::BranchNotFound, msg))
        }
        Err(RepoError::Validation(msg)) => {
            Err(AppError::with_message(ErrorCode::BranchHasStudents, msg))
        }
        Err(e) => Err(e.into()),
    }
}
