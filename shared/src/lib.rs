//! Shared domain types for the Crab restaurant model
//!
//! Branches, staff, tables, menus, orders and reservations, with the
//! small state machines that govern them. Every rejected operation comes
//! back as a [`DomainError`](error::DomainError) and leaves state unchanged.

pub mod error;
pub mod handle;
pub mod ids;
pub mod models;
pub mod money;
pub mod views;

// Re-exports
pub use error::{DomainError, DomainResult, ErrorCategory, ErrorCode};
pub use handle::{Handle, WeakHandle};
pub use ids::{CustomerId, IdAllocator, OrderId, ReservationId};
pub use serde::{Deserialize, Serialize};
