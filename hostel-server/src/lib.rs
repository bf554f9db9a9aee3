//! Hostel Server - 宿舍管理系统服务端
//!
//! # 架构概述
//!
//! 本模块是 Hostel Server 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (WAL)
//! - **认证** (`auth`): JWT 认证与角色检查
//! - **HTTP API** (`api`): 楼栋与学生管理的 RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! hostel-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、角色
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志) 并返回加载的配置
pub fn setup_environment() -> Config {
    // .env 文件可选，缺失时静默跳过
    dotenv::dotenv().ok();

    let config = Config::from_env();
    utils::logger::init_logger_with_file(
        Some(&config.log_level),
        None,
        config.log_dir.as_deref(),
    );

    config
}

pub fn print_banner() {
    println!(
        r#"
    __  __           __       __
   / / / /___  _____/ /____  / /
  / /_/ / __ \/ ___/ __/ _ \/ /
 / __  / /_/ (__  ) /_/  __/ /
/_/ /_/\____/____/\__/\___/_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
