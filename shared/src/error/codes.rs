//! Unified error codes for the stall backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors
//! - 7xxx: Merchant errors
//! - 8xxx: Restaurant status errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a plain `u16` so the admin frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format (malformed JSON body, wrong field types)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has already been paid
    OrderAlreadyPaid = 4002,
    /// Order item references an unknown or unavailable menu item
    OrderItemInvalid = 4006,
    /// Order total is not positive
    OrderEmpty = 4007,
    /// Delivered quantity outside `0..=ordered`
    DeliveryQuantityInvalid = 4008,
    /// Order status value not accepted
    OrderStatusInvalid = 4009,
    /// Restaurant is paused or closed
    RestaurantPaused = 4010,

    // ==================== 5xxx: Payment ====================
    /// Invalid payment method
    PaymentInvalidMethod = 5003,
    /// Payment status value not accepted
    PaymentStatusInvalid = 5006,
    /// Order was not placed with UPI
    PaymentNotUpi = 5007,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item has invalid price
    MenuItemInvalidPrice = 6002,
    /// Menu item with the same name is already on the menu
    MenuItemAlreadyInMenu = 6003,
    /// Name missing from the universal item list
    UniversalItemNotFound = 6004,

    // ==================== 7xxx: Merchant ====================
    /// Merchant account not found
    MerchantNotFound = 7001,
    /// No merchant account is active
    NoActiveMerchant = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
    /// Report generation failed
    ExportFailed = 9101,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::TokenExpired => "Session has expired",
            ErrorCode::TokenInvalid => "Session token is invalid",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyPaid => "Payment already confirmed",
            ErrorCode::OrderItemInvalid => "Order item is invalid",
            ErrorCode::OrderEmpty => "Order total must be greater than 0",
            ErrorCode::DeliveryQuantityInvalid => "Invalid delivered quantity",
            ErrorCode::OrderStatusInvalid => "Invalid order_status",
            ErrorCode::RestaurantPaused => "Restaurant is currently paused",

            // Payment
            ErrorCode::PaymentInvalidMethod => "Invalid payment method. Must be cash or upi",
            ErrorCode::PaymentStatusInvalid => "Invalid payment_status",
            ErrorCode::PaymentNotUpi => "This order is not a UPI order",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Price cannot be negative",
            ErrorCode::MenuItemAlreadyInMenu => "Item already exists in menu",
            ErrorCode::UniversalItemNotFound => "Item not found in universal list",

            // Merchant
            ErrorCode::MerchantNotFound => "Merchant not found",
            ErrorCode::NoActiveMerchant => "No active merchant UPI account found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::ExportFailed => "Database export failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidFormat,
            7 => ErrorCode::RequiredField,
            8 => ErrorCode::ValueOutOfRange,

            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1003 => ErrorCode::TokenExpired,
            1004 => ErrorCode::TokenInvalid,

            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderAlreadyPaid,
            4006 => ErrorCode::OrderItemInvalid,
            4007 => ErrorCode::OrderEmpty,
            4008 => ErrorCode::DeliveryQuantityInvalid,
            4009 => ErrorCode::OrderStatusInvalid,
            4010 => ErrorCode::RestaurantPaused,

            5003 => ErrorCode::PaymentInvalidMethod,
            5006 => ErrorCode::PaymentStatusInvalid,
            5007 => ErrorCode::PaymentNotUpi,

            6001 => ErrorCode::MenuItemNotFound,
            6002 => ErrorCode::MenuItemInvalidPrice,
            6003 => ErrorCode::MenuItemAlreadyInMenu,
            6004 => ErrorCode::UniversalItemNotFound,

            7001 => ErrorCode::MerchantNotFound,
            7002 => ErrorCode::NoActiveMerchant,

            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9005 => ErrorCode::ConfigError,
            9101 => ErrorCode::ExportFailed,

            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::NoActiveMerchant.code(), 7002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidFormat,
            ErrorCode::InvalidCredentials,
            ErrorCode::OrderAlreadyPaid,
            ErrorCode::DeliveryQuantityInvalid,
            ErrorCode::RestaurantPaused,
            ErrorCode::PaymentNotUpi,
            ErrorCode::UniversalItemNotFound,
            ErrorCode::MerchantNotFound,
            ErrorCode::ExportFailed,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_unknown_value() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::NoActiveMerchant).unwrap();
        assert_eq!(json, "7002");
        let code: ErrorCode = serde_json::from_str("4008").unwrap();
        assert_eq!(code, ErrorCode::DeliveryQuantityInvalid);
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(
            ErrorCode::NoActiveMerchant.message(),
            "No active merchant UPI account found"
        );
        assert_eq!(
            ErrorCode::NotAuthenticated.message(),
            "Authentication required"
        );
    }
}
