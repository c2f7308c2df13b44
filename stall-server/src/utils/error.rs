//! 统一错误处理
//!
//! HTTP 层只使用 [`AppError`]；各领域错误 (`RepoError`, `OrderError`,
//! `JwtError`) 在各自模块里实现 `From` 转换。
//!
//! ```ignore
//! Err(AppError::with_message(ErrorCode::OrderNotFound, "Order not found"))
//! ```

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
