//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are Unix millis.

pub mod admin_user;
pub mod menu_item;
pub mod merchant;
pub mod order;
pub mod restaurant_status;

// Re-exports
pub use admin_user::*;
pub use menu_item::*;
pub use merchant::*;
pub use order::*;
pub use restaurant_status::*;
