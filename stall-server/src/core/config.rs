use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::ServerError;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5174";

/// 服务器配置 - 摊位后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | DATABASE_PATH | <WORK_DIR>/stall.db | SQLite 数据库文件 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录 (存在时按天滚动写文件) |
/// | LOG_JSON | false | JSON 格式日志 |
/// | CORS_ORIGINS | http://localhost:5174 | 允许的来源，逗号分隔；`*` 表示任意 |
/// | ADMIN_USERNAME | admin | 初始管理员用户名 |
/// | ADMIN_PASSWORD | admin123 | 初始管理员密码 |
/// | JWT_SECRET | (debug 下自动生成) | 会话签名密钥，至少 32 字符 |
/// | JWT_EXPIRATION_MINUTES | 720 | 会话有效期 (分钟) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时 (毫秒) |
/// | SEED_ON_EMPTY | true | 菜单为空时写入初始数据 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_PASSWORD=s3cret cargo run -p stall-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// SQLite 数据库路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 会话配置
    pub jwt: JwtConfig,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 允许的跨域来源 (包含 `*` = 任意来源)
    pub cors_origins: Vec<String>,
    /// 初始管理员账号 (仅在写入初始数据时使用)
    pub admin_username: String,
    pub admin_password: String,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 菜单为空时是否写入初始数据
    pub seed_on_empty: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。
    /// release 构建缺少有效 `JWT_SECRET` 时返回 [`ServerError::Config`]。
    pub fn from_env() -> Result<Self, ServerError> {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("stall.db")
                .to_string_lossy()
                .into_owned()
        });

        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            database_path,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            jwt,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into()),
            ),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            seed_on_empty: std::env::var("SEED_ON_EMPTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            work_dir,
        })
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否允许任意来源
    pub fn cors_permissive(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Comma separated list; `*` means any origin, blank input keeps the default
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() {
        return vec![DEFAULT_CORS_ORIGIN.to_string()];
    }
    origins
}
