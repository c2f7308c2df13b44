//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer pays
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PaymentMethod {
    Cash,
    Upi,
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum PaymentStatus {
    Pending,
    /// Set by customer self-confirmation of a UPI payment
    Unpaid,
    Paid,
}

/// Fulfillment state; advances to `Served` once everything is delivered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    New,
    Preparing,
    Served,
}

/// Unrecognized enum text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct ParseEnumError(pub String);

macro_rules! text_enum {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// Case-insensitive, surrounding whitespace ignored
        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError(s.to_string())),
                }
            }
        }
    };
}

text_enum!(PaymentMethod { Cash => "cash", Upi => "upi" });
text_enum!(PaymentStatus { Pending => "pending", Unpaid => "unpaid", Paid => "paid" });
text_enum!(OrderStatus { New => "new", Preparing => "preparing", Served => "served" });

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    #[serde(skip)]
    pub order_id: i64,
    pub menu_item_id: i64,
    /// Joined from menu_items
    pub menu_item_name: Option<String>,
    pub full_qty: i64,
    pub half_qty: i64,
    pub delivered_full: i64,
    pub delivered_half: i64,
}

impl OrderItem {
    pub fn is_fully_delivered(&self) -> bool {
        self.delivered_full >= self.full_qty && self.delivered_half >= self.half_qty
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    #[serde(with = "crate::util::rfc3339_millis")]
    pub timestamp: i64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub total_amount: f64,
    pub merchant_upi_id: Option<i64>,
    /// Joined UPI id of the attached merchant account
    pub merchant_upi: Option<String>,
    pub customer_name: String,
    pub customer_phone: String,

    // -- Relations (populated by application code, skipped by FromRow) --

    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// True when the order has lines and every line is fully delivered.
    /// An order without lines is never fully delivered.
    pub fn is_fully_delivered(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(OrderItem::is_fully_delivered)
    }
}

/// Requested order line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: Option<i64>,
    pub full_qty: Option<i64>,
    pub half_qty: Option<i64>,
}

/// Create order payload
///
/// Fields are optional so that missing ones surface as validation errors.
/// Any client-side total is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub payment_method: Option<String>,
    pub items: Option<Vec<OrderItemInput>>,
}

/// Delivery progress for one line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryUpdate {
    pub id: Option<i64>,
    pub delivered_full: Option<i64>,
    pub delivered_half: Option<i64>,
}

/// Admin order update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub payment_status: Option<String>,
    pub order_status: Option<String>,
    pub items: Option<Vec<DeliveryUpdate>>,
}

/// Manual payment confirmation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentConfirm {
    pub order_id: Option<i64>,
}
