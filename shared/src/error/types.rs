//! Domain error type

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection reason for a restaurant operation
///
/// Every variant describes a request that was refused without touching
/// state. Callers decide whether to log, ignore or escalate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A state machine guard refused the transition
    #[error("{subject}: {} (status: {status})", .code.message())]
    InvalidTransition {
        code: ErrorCode,
        subject: String,
        status: String,
    },

    /// Removal or lookup of something that is not a member
    #[error("{resource} not found")]
    NotFound { code: ErrorCode, resource: String },

    /// Duplicate membership
    #[error("{resource} already exists")]
    AlreadyExists { code: ErrorCode, resource: String },

    /// Second manager assignment on a branch
    #[error("{branch} branch already has a manager")]
    ManagerAlreadyAssigned { branch: String },

    /// Negative menu item price
    #[error("price must be non-negative, got {price}")]
    InvalidPrice { price: Decimal },
}

impl DomainError {
    // ========== Convenient constructors ==========

    /// Create an InvalidTransition error
    pub fn invalid_transition(
        code: ErrorCode,
        subject: impl Into<String>,
        status: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidTransition {
            code,
            subject: subject.into(),
            status: status.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(code: ErrorCode, resource: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            resource: resource.into(),
        }
    }

    /// Create an AlreadyExists error
    pub fn already_exists(code: ErrorCode, resource: impl Into<String>) -> Self {
        Self::AlreadyExists {
            code,
            resource: resource.into(),
        }
    }

    // ========== Error inspection methods ==========

    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidTransition { code, .. } => *code,
            Self::NotFound { code, .. } => *code,
            Self::AlreadyExists { code, .. } => *code,
            Self::ManagerAlreadyAssigned { .. } => ErrorCode::ManagerAlreadyAssigned,
            Self::InvalidPrice { .. } => ErrorCode::MenuItemInvalidPrice,
        }
    }

    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err =
            DomainError::invalid_transition(ErrorCode::OrderNotReady, "Order #3", "Received");
        assert_eq!(
            err.to_string(),
            "Order #3: Order is not ready for serving (status: Received)"
        );
        assert_eq!(err.code(), ErrorCode::OrderNotReady);
        assert_eq!(err.category(), ErrorCategory::Order);
    }

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found(ErrorCode::StaffNotFound, "Chef Gordon");
        assert_eq!(err.to_string(), "Chef Gordon not found");
        assert_eq!(err.category(), ErrorCategory::Staff);
    }

    #[test]
    fn test_fixed_codes() {
        let err = DomainError::ManagerAlreadyAssigned {
            branch: "Main Branch".to_string(),
        };
        assert_eq!(err.to_string(), "Main Branch branch already has a manager");
        assert_eq!(err.code(), ErrorCode::ManagerAlreadyAssigned);

        let err = DomainError::InvalidPrice {
            price: Decimal::new(-150, 2),
        };
        assert_eq!(err.code(), ErrorCode::MenuItemInvalidPrice);
        assert_eq!(err.to_string(), "price must be non-negative, got -1.50");
    }

    #[test]
    fn test_reservation_error_category_and_kind() {
        let err = DomainError::invalid_transition(
            ErrorCode::ReservationNotConfirmed,
            "Reservation #1",
            "Canceled",
        );
        assert_eq!(err.category(), ErrorCategory::Reservation);
        assert_eq!(err.code().general(), ErrorCode::InvalidTransition);

        let err = DomainError::already_exists(ErrorCode::TableAlreadyExists, "Table 1");
        assert_eq!(err.code().general(), ErrorCode::AlreadyExists);
    }
}
