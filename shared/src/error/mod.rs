//! Unified error system for the restaurant domain
//!
//! - [`ErrorCode`]: Standardized numeric codes for every rejection
//! - [`ErrorCategory`]: Classification of errors by domain area
//! - [`DomainError`]: Soft-fail rejection reasons returned by operations
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Table errors
//! - 8xxx: Staff errors
//! - 9xxx: Reservation errors
//!
//! # Example
//!
//! ```
//! use shared::error::{DomainError, ErrorCode};
//!
//! let err = DomainError::not_found(ErrorCode::MenuItemNotFound, "Soup");
//! assert_eq!(err.code(), ErrorCode::MenuItemNotFound);
//! assert_eq!(err.to_string(), "Soup not found");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{DomainError, DomainResult};
