//! Shared types for the stall backend
//!
//! Domain models, the unified error system and small time utilities used by
//! `stall-server` and its tests.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
