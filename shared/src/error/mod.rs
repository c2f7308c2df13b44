//! Unified error system for the stall backend
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with code, message and flattened details
//!
//! Every failing endpoint answers with the same JSON shape:
//!
//! ```json
//! { "error": "Restaurant is currently paused", "code": 4010, "message": "Back in 10 min" }
//! ```
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::RestaurantPaused, "Restaurant is currently paused")
//!     .with_detail("message", "Back in 10 min");
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
