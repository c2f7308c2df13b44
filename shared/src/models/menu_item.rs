//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity (当前在售菜单)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price_full: f64,
    pub price_half: f64,
    pub is_available: bool,
    #[serde(skip)]
    pub created_at: i64,
}

/// Add-from-universal-list payload
///
/// `name` must match an entry of the universal list; prices fall back to the
/// universal pricing when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemAdd {
    pub name: Option<String>,
    pub price_full: Option<f64>,
    pub price_half: Option<f64>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub is_available: Option<bool>,
    pub price_full: Option<f64>,
    pub price_half: Option<f64>,
}

/// Universal list entry as shown in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UniversalItemView {
    pub name: String,
    pub category: String,
    pub price_full: f64,
    pub price_half: f64,
    pub in_menu: bool,
}
