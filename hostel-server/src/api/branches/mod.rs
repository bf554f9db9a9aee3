//! Branch API 模块
//!
//! 楼栋的增删改查，全部需要 staff 或 admin 角色。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/branches", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get_all).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_staff))
}
