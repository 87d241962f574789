//! # rental-core: Pure Business Logic for the Rental Agency
//!
//! Vehicles, customers, pricing and the agency fleet, as plain values and
//! pure functions. Nothing here prints or reads the environment.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rental Agency Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-cli (Scenario Driver)                 │   │
//! │  │   config ──► add car ──► list ──► rent ──► list ──► return     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ receipts                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  vehicle  │  │   money   │  │  agency   │  │ validation│  │   │
//! │  │   │   Car     │  │   Money   │  │   Fleet   │  │   guards  │  │   │
//! │  │   │ Rentable  │  │ discount  │  │  listing  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDOUT • NO ENVIRONMENT                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Customer, Availability, VehicleKind
//! - [`vehicle`] - VehicleInfo, Car, Vehicle, and the Priceable/Rentable traits
//! - [`agency`] - RentalAgency and FleetIndex
//! - [`shared`] - Mutex-guarded agency handle
//! - [`receipt`] - Rental and return receipts
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Constructor guards
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Car, Customer, Money, RentalAgency};
//!
//! let mut agency = RentalAgency::new();
//! let car = Car::new("C123", "Honda Accord", Money::parse("50").unwrap()).unwrap();
//! let jeff = Customer::new("CU01", "Jeff");
//!
//! let index = agency.add_vehicle(car);
//! let receipt = agency.rent(index, &jeff, 5).unwrap();
//!
//! assert_eq!(
//!     receipt.to_string(),
//!     "Jeff rented Car: Honda Accord for 5 days at a cost of 250.00"
//! );
//! assert_eq!(agency.list_available_vehicles().count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod agency;
pub mod error;
pub mod money;
pub mod receipt;
pub mod shared;
pub mod types;
pub mod validation;
pub mod vehicle;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use agency::{FleetIndex, RentalAgency};
pub use error::{RentalError, RentalResult, ValidationError};
pub use money::Money;
pub use receipt::{RentalReceipt, ReturnReceipt};
pub use shared::SharedAgency;
pub use types::*;
pub use vehicle::{Car, Priceable, Rentable, Vehicle, VehicleInfo};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rentals longer than this many days are discounted.
pub const LONG_RENTAL_THRESHOLD_DAYS: i64 = 7;

/// Discount on long rentals, in basis points (1000 = 10%, cost × 0.9).
pub const LONG_RENTAL_DISCOUNT_BPS: u32 = 1000;
