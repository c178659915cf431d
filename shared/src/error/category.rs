//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Order errors
/// - 6xxx: Menu errors
/// - 7xxx: Table errors
/// - 8xxx: Staff errors
/// - 9xxx: Reservation errors
///
/// Codes outside every domain range count as general.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order errors (4xxx)
    Order,
    /// Menu errors (6xxx)
    Menu,
    /// Table errors (7xxx)
    Table,
    /// Staff errors (8xxx)
    Staff,
    /// Reservation errors (9xxx)
    Reservation,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            4000..5000 => Self::Order,
            6000..7000 => Self::Menu,
            7000..8000 => Self::Table,
            8000..9000 => Self::Staff,
            9000..10000 => Self::Reservation,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(5), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(6002), ErrorCategory::Menu);
        assert_eq!(ErrorCategory::from_code(7003), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(8002), ErrorCategory::Staff);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from_code(2500), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::General);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::OrderNotReady.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::IngredientNotFound.category(), ErrorCategory::Menu);
        assert_eq!(ErrorCode::TableOccupied.category(), ErrorCategory::Table);
        assert_eq!(
            ErrorCode::ManagerAlreadyAssigned.category(),
            ErrorCategory::Staff
        );
        assert_eq!(
            ErrorCode::ReservationNotConfirmed.category(),
            ErrorCategory::Reservation
        );
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Table).unwrap();
        assert_eq!(json, "\"table\"");

        let category: ErrorCategory = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(category, ErrorCategory::Staff);
    }
}
