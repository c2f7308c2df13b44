//! Merchant Account Model

use serde::{Deserialize, Serialize};

/// UPI payment identity; at most one is active
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MerchantAccount {
    pub id: i64,
    pub name: String,
    pub upi_id: String,
    pub is_active: bool,
    #[serde(skip)]
    pub created_at: i64,
}
