//! Stall Server - 小吃摊点餐与后台管理服务
//!
//! # 架构概述
//!
//! - **点餐** (`orders`): 下单校验、金额计算、付款确认、出餐进度
//! - **菜单** (`catalog`): 通用菜品列表与在售菜单
//! - **数据库** (`db`): SQLite (sqlx) 连接池、迁移、仓储函数、初始数据
//! - **认证** (`auth`): JWT 会话 + Argon2 密码
//! - **导出** (`export`): 全库导出为 xlsx
//! - **HTTP API** (`api`): axum 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! stall-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 菜单管理
//! ├── orders/        # 订单服务
//! ├── export/        # xlsx 导出
//! ├── db/            # 数据库层
//! └── utils/         # 日志、错误、提取器
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod db;
pub mod export;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentAdmin, JwtService};
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

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

/// 设置运行环境: 加载 `.env`，初始化日志
///
/// 日志读取 `LOG_LEVEL` / `LOG_DIR` / `LOG_JSON`，须在 [`Config::from_env`] 之前调用。
pub fn setup_environment() -> Result<(), ServerError> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(ServerError::Config(format!("Failed to load .env: {e}")));
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    let json = std::env::var("LOG_JSON").ok().map(|v| v == "true" || v == "1");
    init_logger_with_file(log_level.as_deref(), json, log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ __        ____
  / ___// /_____ _/ / /
  \__ \/ __/ __ `/ / /
 ___/ / /_/ /_/ / / /
/____/\__/\__,_/_/_/
    "#
    );
}
