//! Data models
//!
//! Entities, aggregates and their state machines. Entities referenced from
//! several places are held through [`Handle`](crate::handle::Handle).

pub mod address;
pub mod branch;
pub mod customer;
pub mod dining_table;
pub mod employee;
pub mod kitchen;
pub mod menu;
pub mod order;
pub mod person;
pub mod reservation;
pub mod restaurant;

// Re-exports
pub use address::*;
pub use branch::*;
pub use customer::*;
pub use dining_table::*;
pub use employee::*;
pub use kitchen::*;
pub use menu::*;
pub use order::*;
pub use person::*;
pub use reservation::*;
pub use restaurant::*;
