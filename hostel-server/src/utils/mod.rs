//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`ApiResponse`] - 错误与响应类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`validation`] - 请求参数校验

pub mod logger;
pub mod validation;

// Re-export error types from the shared crate
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
