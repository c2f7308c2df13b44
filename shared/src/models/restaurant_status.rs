//! Restaurant Status Model

use serde::{Deserialize, Serialize};

/// Pause message used when the operator has not set one
pub const DEFAULT_PAUSE_MESSAGE: &str = "We are having multiple orders. This may take time.";

/// Restaurant status singleton (id = 1)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantStatus {
    #[serde(skip)]
    pub id: i64,
    pub is_open: bool,
    pub pause_message: String,
    #[serde(skip)]
    pub updated_at: i64,
}

/// Update restaurant status payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantStatusUpdate {
    pub is_open: Option<bool>,
    pub pause_message: Option<String>,
}
