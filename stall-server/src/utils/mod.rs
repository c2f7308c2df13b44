//! 工具模块
//!
//! - [`error`] - 统一错误 (来自 shared)
//! - [`logger`] - 日志初始化
//! - [`extract`] - JSON 请求体提取器

pub mod error;
pub mod extract;
pub mod logger;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use extract::AppJson;
