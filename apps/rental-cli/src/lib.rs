//! # Rental CLI
//!
//! Scenario driver for the rental agency.
//!
//! ## Configuration
//! Environment variables:
//! - `RENTAL_VEHICLE_ID` - Car identifier (default: C123)
//! - `RENTAL_VEHICLE_MODEL` - Car model (default: Honda Accord)
//! - `RENTAL_BASE_RATE` - Daily rate as a decimal (default: 50)
//! - `RENTAL_CUSTOMER_ID` - Customer identifier (default: CU01)
//! - `RENTAL_CUSTOMER_NAME` - Customer name (default: Jeff)
//! - `RENTAL_DAYS` - Rental length (default: 5)
//! - `RUST_LOG` - Log filter, logs go to stderr (default: warn)

pub mod config;
pub mod scenario;

// Re-exports
pub use config::{ConfigError, ScenarioConfig};
pub use scenario::run;
