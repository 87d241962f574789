//! # Domain Types
//!
//! Small value types shared by vehicles, receipts and the agency.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │  Availability   │   │   VehicleKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer_id    │   │  Available      │   │  Car            │       │
//! │  │  name           │   │  Rented         │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Customer
// =============================================================================

/// A renting customer. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    customer_id: String,
    name: String,
}

impl Customer {
    /// Creates a customer. Any id and name are accepted, including empty ones.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::Customer;
    ///
    /// let jeff = Customer::new("CU01", "Jeff");
    /// assert_eq!(jeff.name(), "Jeff");
    /// assert_eq!(Customer::new("CU02", "").name(), "");
    /// ```
    pub fn new(customer_id: impl Into<String>, name: impl Into<String>) -> Self {
        Customer {
            customer_id: customer_id.into(),
            name: name.into(),
        }
    }

    #[inline]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Rental state of a single vehicle.
///
/// ## State Machine
/// ```text
///              start_rental()
///   ┌───────────┐ ───────────► ┌──────────┐
///   │ Available │              │  Rented  │ ── start_rental() → refused
///   └───────────┘ ◄─────────── └──────────┘
///      ▲    │      end_rental()
///      └────┘
///   end_rental() (no-op transition)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Vehicle may be rented.
    Available,
    /// Vehicle is out with a customer.
    Rented,
}

impl Availability {
    /// Transition taken by a rental. `None` when the vehicle is already out.
    #[inline]
    pub const fn start_rental(self) -> Option<Availability> {
        match self {
            Availability::Available => Some(Availability::Rented),
            Availability::Rented => None,
        }
    }

    /// Transition taken by a return. Always lands on `Available`.
    #[inline]
    pub const fn end_rental(self) -> Availability {
        match self {
            Availability::Available | Availability::Rented => Availability::Available,
        }
    }

    #[inline]
    pub const fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }

    #[inline]
    pub const fn from_flag(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Rented
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::Available
    }
}

// =============================================================================
// Vehicle Kind
// =============================================================================

/// Discriminant of the concrete vehicle variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Car,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Car => f.write_str("Car"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_exposes_supplied_fields() {
        let customer = Customer::new("CU01", "Jeff");
        assert_eq!(customer.customer_id(), "CU01");
        assert_eq!(customer.name(), "Jeff");
    }

    #[test]
    fn test_customer_accepts_empty_fields() {
        let customer = Customer::new("", "");
        assert_eq!(customer.customer_id(), "");
        assert_eq!(customer.name(), "");

        let customer = Customer::new("CU01", "  ");
        assert_eq!(customer.name(), "  ");
    }

    #[test]
    fn test_availability_transitions() {
        assert_eq!(Availability::default(), Availability::Available);
        assert_eq!(
            Availability::Available.start_rental(),
            Some(Availability::Rented)
        );
        assert_eq!(Availability::Rented.start_rental(), None);
        assert_eq!(Availability::Rented.end_rental(), Availability::Available);
        assert_eq!(Availability::Available.end_rental(), Availability::Available);
    }

    #[test]
    fn test_availability_flag_round_trip() {
        assert!(Availability::from_flag(true).is_available());
        assert!(!Availability::from_flag(false).is_available());
    }

    #[test]
    fn test_vehicle_kind_display() {
        assert_eq!(VehicleKind::Car.to_string(), "Car");
    }
}
