//! Crab restaurant demo
//!
//! Wires the demo scenario on top of the `shared` domain model:
//!
//! - `config`: environment-driven settings
//! - `logger`: tracing subscriber setup
//! - `scenario`: builds the restaurant, staff, menu, reservation and order
//! - `transcript`: renders the result as text lines or JSON

pub mod config;
pub mod logger;
pub mod scenario;
pub mod transcript;

pub use config::{Config, OutputFormat};
pub use logger::{init_logger, init_logger_with_format};
pub use scenario::{DemoWorld, build};
