//! Unified error codes for the restaurant domain
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Table and seat errors
//! - 8xxx: Staff errors
//! - 9xxx: Reservation errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive
/// serialization into views and log fields unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// State machine rejected the requested transition
    InvalidTransition = 5,

    // ==================== 4xxx: Order ====================
    /// Order is not in `Received`
    OrderNotReceived = 4001,
    /// Order is not in `Preparation`
    OrderNotReady = 4002,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item has invalid price
    MenuItemInvalidPrice = 6002,
    /// Ingredient not found on the menu item
    IngredientNotFound = 6003,

    // ==================== 7xxx: Table ====================
    /// Table is occupied
    TableOccupied = 7002,
    /// Table is not occupied
    TableNotOccupied = 7003,
    /// Table already belongs to the branch
    TableAlreadyExists = 7004,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found in the team
    StaffNotFound = 8001,
    /// Branch already has a manager
    ManagerAlreadyAssigned = 8002,

    // ==================== 9xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 9001,
    /// Reservation cannot be canceled
    ReservationNotConfirmed = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// General kind of this code (`NotFound`, `AlreadyExists`,
    /// `InvalidTransition` or `ValidationFailed`)
    ///
    /// Callers that only care about the kind of rejection match on this
    /// instead of every domain-specific code.
    pub const fn general(&self) -> ErrorCode {
        match self {
            ErrorCode::ValidationFailed | ErrorCode::MenuItemInvalidPrice => {
                ErrorCode::ValidationFailed
            }
            ErrorCode::NotFound
            | ErrorCode::MenuItemNotFound
            | ErrorCode::IngredientNotFound
            | ErrorCode::StaffNotFound
            | ErrorCode::ReservationNotFound => ErrorCode::NotFound,
            ErrorCode::AlreadyExists
            | ErrorCode::TableAlreadyExists
            | ErrorCode::ManagerAlreadyAssigned => ErrorCode::AlreadyExists,
            ErrorCode::InvalidTransition
            | ErrorCode::OrderNotReceived
            | ErrorCode::OrderNotReady
            | ErrorCode::TableOccupied
            | ErrorCode::TableNotOccupied
            | ErrorCode::ReservationNotConfirmed => ErrorCode::InvalidTransition,
        }
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidTransition => "Invalid state transition",

            // Order
            ErrorCode::OrderNotReceived => "Order cannot be cooked at the moment",
            ErrorCode::OrderNotReady => "Order is not ready for serving",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item price must be non-negative",
            ErrorCode::IngredientNotFound => "Ingredient not found in the menu item",

            // Table
            ErrorCode::TableOccupied => "Table is already occupied",
            ErrorCode::TableNotOccupied => "Table is not occupied",
            ErrorCode::TableAlreadyExists => "Table already exists in the branch",

            // Staff
            ErrorCode::StaffNotFound => "Staff member not found",
            ErrorCode::ManagerAlreadyAssigned => "Branch already has a manager",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationNotConfirmed => "Reservation cannot be canceled",
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
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidTransition),

            // Order
            4001 => Ok(ErrorCode::OrderNotReceived),
            4002 => Ok(ErrorCode::OrderNotReady),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6002 => Ok(ErrorCode::MenuItemInvalidPrice),
            6003 => Ok(ErrorCode::IngredientNotFound),

            // Table
            7002 => Ok(ErrorCode::TableOccupied),
            7003 => Ok(ErrorCode::TableNotOccupied),
            7004 => Ok(ErrorCode::TableAlreadyExists),

            // Staff
            8001 => Ok(ErrorCode::StaffNotFound),
            8002 => Ok(ErrorCode::ManagerAlreadyAssigned),

            // Reservation
            9001 => Ok(ErrorCode::ReservationNotFound),
            9002 => Ok(ErrorCode::ReservationNotConfirmed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
