//! Order lifecycle
//!
//! - [`service`] - creation, manual payment confirmation, listing
//! - [`fulfillment`] - admin status and delivery updates
//! - [`money`] - decimal totals
//! - [`upi`] - UPI pay links

pub mod fulfillment;
pub mod money;
pub mod service;
pub mod upi;

pub use fulfillment::update_order;
pub use service::{CreatedOrder, confirm_payment, create_order, list_active, list_delivered};

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

/// Order errors
///
/// Display strings are the messages clients see.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Restaurant is currently paused")]
    RestaurantPaused { message: String },

    #[error("Missing required fields: items, payment_method")]
    MissingFields,

    #[error("Customer name is required")]
    CustomerNameRequired,

    #[error("Customer phone number is required")]
    CustomerPhoneRequired,

    #[error("Invalid payment method. Must be cash or upi")]
    InvalidPaymentMethod,

    #[error("Items must be a non-empty list")]
    NoItems,

    #[error("No active merchant UPI account found")]
    NoActiveMerchant,

    #[error("Missing menu_item_id in item")]
    MissingMenuItemId,

    #[error("Quantities cannot be negative")]
    NegativeQuantity,

    #[error("Quantity exceeds maximum allowed ({})", money::MAX_QUANTITY)]
    QuantityTooLarge,

    #[error("Menu item {0} not found")]
    MenuItemNotFound(i64),

    #[error("{0} is currently unavailable")]
    MenuItemUnavailable(String),

    #[error("Order total must be greater than 0")]
    EmptyTotal,

    #[error("Order total too large")]
    TotalTooLarge,

    #[error("Missing order_id")]
    MissingOrderId,

    #[error("Order not found")]
    OrderNotFound,

    #[error("This order is not a UPI order")]
    NotUpiOrder,

    #[error("Payment already confirmed")]
    AlreadyPaid,

    #[error("Invalid payment_status")]
    InvalidPaymentStatus,

    #[error("Invalid order_status")]
    InvalidOrderStatus,

    #[error("Invalid delivered_full quantity")]
    InvalidDeliveredFull,

    #[error("Invalid delivered_half quantity")]
    InvalidDeliveredHalf,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl OrderError {
    fn code(&self) -> ErrorCode {
        match self {
            Self::RestaurantPaused { .. } => ErrorCode::RestaurantPaused,
            Self::MissingFields
            | Self::CustomerNameRequired
            | Self::CustomerPhoneRequired
            | Self::MissingMenuItemId
            | Self::MissingOrderId => ErrorCode::RequiredField,
            Self::InvalidPaymentMethod => ErrorCode::PaymentInvalidMethod,
            Self::NoItems => ErrorCode::InvalidRequest,
            Self::NoActiveMerchant => ErrorCode::NoActiveMerchant,
            Self::NegativeQuantity | Self::QuantityTooLarge | Self::TotalTooLarge => {
                ErrorCode::ValueOutOfRange
            }
            Self::MenuItemNotFound(_) | Self::MenuItemUnavailable(_) => ErrorCode::OrderItemInvalid,
            Self::EmptyTotal => ErrorCode::OrderEmpty,
            Self::OrderNotFound => ErrorCode::OrderNotFound,
            Self::NotUpiOrder => ErrorCode::PaymentNotUpi,
            Self::AlreadyPaid => ErrorCode::OrderAlreadyPaid,
            Self::InvalidPaymentStatus => ErrorCode::PaymentStatusInvalid,
            Self::InvalidOrderStatus => ErrorCode::OrderStatusInvalid,
            Self::InvalidDeliveredFull | Self::InvalidDeliveredHalf => {
                ErrorCode::DeliveryQuantityInvalid
            }
            Self::Repo(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Repo(e) => e.into(),
            OrderError::RestaurantPaused { message } => {
                AppError::new(ErrorCode::RestaurantPaused).with_detail("message", message)
            }
            other => AppError::with_message(other.code(), other.to_string()),
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
