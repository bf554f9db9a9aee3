use crate::auth::JwtConfig;

/// 服务器配置 - 宿舍管理服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | hostel.db | SQLite 数据库文件 |
/// | LOG_LEVEL | debug (开发) / info (生产) | 日志级别 |
/// | LOG_DIR | 无 (仅输出到终端) | 日志文件目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// JWT 相关变量见 [`JwtConfig`]。
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/hostel.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 日志文件目录 (未设置则仅输出到终端)
    pub log_dir: Option<String>,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let default_level = if environment == "production" {
            "info"
        } else {
            "debug"
        };

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "hostel.db".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            jwt: JwtConfig::default(),
            environment,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, database_path: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.database_path = database_path.into();
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
