//! # Receipts
//!
//! Values produced by rent and return. Their `Display` impls are the
//! confirmation lines the driver prints:
//!
//! ```text
//! Jeff rented Car: Honda Accord for 5 days at a cost of 250.00
//! Car returned: Honda Accord
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::types::{Availability, VehicleKind};

/// Outcome of a successful rental.
///
/// The receipt is the only trace of who rented what; the vehicle does not
/// remember its customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalReceipt {
    pub customer_id: String,
    pub customer_name: String,
    pub vehicle_id: String,
    pub model: String,
    pub kind: VehicleKind,
    /// Day count as requested; not validated.
    pub days: i64,
    pub cost: Money,
}

impl fmt::Display for RentalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rented {}: {} for {} days at a cost of {}",
            self.customer_name,
            self.kind,
            self.model,
            self.days,
            self.cost.to_decimal_string()
        )
    }
}

/// Outcome of a return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub vehicle_id: String,
    pub model: String,
    pub kind: VehicleKind,
    /// Availability before the return. `Available` means nothing changed.
    pub previous: Availability,
}

impl ReturnReceipt {
    /// Whether the return actually ended a rental.
    #[inline]
    pub fn ended_rental(&self) -> bool {
        self.previous == Availability::Rented
    }
}

impl fmt::Display for ReturnReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} returned: {}", self.kind, self.model)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rental(days: i64, cost_cents: i64) -> RentalReceipt {
        RentalReceipt {
            customer_id: "CU01".to_string(),
            customer_name: "Jeff".to_string(),
            vehicle_id: "C123".to_string(),
            model: "Honda Accord".to_string(),
            kind: VehicleKind::Car,
            days,
            cost: Money::from_cents(cost_cents),
        }
    }

    #[test]
    fn test_rental_receipt_display() {
        assert_eq!(
            rental(5, 25000).to_string(),
            "Jeff rented Car: Honda Accord for 5 days at a cost of 250.00"
        );
        assert_eq!(
            rental(-1, -5000).to_string(),
            "Jeff rented Car: Honda Accord for -1 days at a cost of -50.00"
        );
    }

    #[test]
    fn test_return_receipt_display() {
        let receipt = ReturnReceipt {
            vehicle_id: "C123".to_string(),
            model: "Honda Accord".to_string(),
            kind: VehicleKind::Car,
            previous: Availability::Rented,
        };
        assert_eq!(receipt.to_string(), "Car returned: Honda Accord");
        assert!(receipt.ended_rental());
    }

    #[test]
    fn test_rental_receipt_serializes_cost_in_cents() {
        let json = serde_json::to_value(rental(8, 36000)).unwrap();
        assert_eq!(json["cost"], 36000);
        assert_eq!(json["kind"], "car");
        assert_eq!(json["customer_name"], "Jeff");
    }
}
