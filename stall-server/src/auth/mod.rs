//! 认证授权模块
//!
//! - [`JwtService`] - 会话令牌服务
//! - [`CurrentAdmin`] - 当前管理员上下文
//! - [`require_auth`] - 认证中间件
//! - [`password`] - Argon2 密码哈希

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentAdmin, JwtConfig, JwtError, JwtService};
pub use middleware::{SESSION_COOKIE, require_auth};
pub use password::{hash_password, verify_password};
