//! # Vehicles
//!
//! Common vehicle state, the two capability traits, and the `Car` variant.
//!
//! ## Capability Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vehicle Model                                   │
//! │                                                                         │
//! │   VehicleInfo  (id, model, base rate, availability)                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   Car { info }  ──implements──►  Priceable  (cost, availability rule)  │
//! │        │                   └──►  Rentable   (rent, return)             │
//! │        ▼                                                                │
//! │   enum Vehicle { Car(Car) }  ──delegates both traits to the variant    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rent and return never print. They hand back receipts; the caller decides
//! where the text goes.

use serde::Serialize;
use tracing::debug;

use crate::error::{RentalError, RentalResult};
use crate::money::Money;
use crate::receipt::{RentalReceipt, ReturnReceipt};
use crate::types::{Availability, Customer, VehicleKind};
use crate::validation::{
    validate_base_rental_rate, validate_model, validate_vehicle_id, ValidationResult,
};
use crate::{LONG_RENTAL_DISCOUNT_BPS, LONG_RENTAL_THRESHOLD_DAYS};

// =============================================================================
// Capability Traits
// =============================================================================

/// Pricing and availability rules a vehicle variant must define.
pub trait Priceable {
    /// Cost of renting for `days`. Deterministic in `days` and the base rate.
    fn calculate_rental_cost(&self, days: i64) -> Money;

    /// Whether the variant considers itself rentable right now.
    fn is_available_for_rental(&self) -> bool;
}

/// Rent/return behavior.
pub trait Rentable {
    /// Rents the vehicle to `customer`.
    ///
    /// Fails with [`RentalError::VehicleUnavailable`] when already rented;
    /// the vehicle is left untouched in that case.
    fn rent(&mut self, customer: &Customer, days: i64) -> RentalResult<RentalReceipt>;

    /// Marks the vehicle available. Has no precondition.
    fn return_vehicle(&mut self) -> ReturnReceipt;
}

// =============================================================================
// Vehicle Info (shared state)
// =============================================================================

/// State every vehicle variant carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleInfo {
    vehicle_id: String,
    model: String,
    base_rental_rate: Money,
    availability: Availability,
}

impl VehicleInfo {
    /// Validates and builds the shared state. New vehicles start `Available`.
    pub fn new(
        vehicle_id: impl Into<String>,
        model: impl Into<String>,
        base_rental_rate: Money,
    ) -> ValidationResult<Self> {
        let vehicle_id = vehicle_id.into();
        let model = model.into();

        validate_vehicle_id(&vehicle_id)?;
        validate_model(&model)?;
        validate_base_rental_rate(base_rental_rate)?;

        Ok(VehicleInfo {
            vehicle_id,
            model,
            base_rental_rate,
            availability: Availability::Available,
        })
    }

    #[inline]
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[inline]
    pub fn base_rental_rate(&self) -> Money {
        self.base_rental_rate
    }

    #[inline]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Plain mutator; no transition rules are checked.
    #[inline]
    pub fn set_available(&mut self, available: bool) {
        self.availability = Availability::from_flag(available);
    }

    fn start_rental(&mut self) -> RentalResult<()> {
        match self.availability.start_rental() {
            Some(next) => {
                self.availability = next;
                Ok(())
            }
            None => Err(RentalError::VehicleUnavailable {
                vehicle_id: self.vehicle_id.clone(),
                model: self.model.clone(),
            }),
        }
    }

    fn end_rental(&mut self) -> Availability {
        let previous = self.availability;
        self.availability = previous.end_rental();
        previous
    }
}

// =============================================================================
// Car
// =============================================================================

/// A passenger car. Rentals longer than a week get 10% off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    #[serde(flatten)]
    info: VehicleInfo,
}

impl Car {
    /// Creates a car.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Car, Money, Priceable};
    ///
    /// let car = Car::new("C123", "Honda Accord", Money::from_cents(5000)).unwrap();
    /// assert!(car.info().is_available());
    /// assert_eq!(car.calculate_rental_cost(5).to_decimal_string(), "250.00");
    /// assert_eq!(car.calculate_rental_cost(8).to_decimal_string(), "360.00");
    ///
    /// assert!(Car::new("C124", "Civic", Money::zero()).is_err());
    /// ```
    pub fn new(
        vehicle_id: impl Into<String>,
        model: impl Into<String>,
        base_rental_rate: Money,
    ) -> ValidationResult<Self> {
        Ok(Car {
            info: VehicleInfo::new(vehicle_id, model, base_rental_rate)?,
        })
    }

    #[inline]
    pub fn info(&self) -> &VehicleInfo {
        &self.info
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut VehicleInfo {
        &mut self.info
    }
}

impl Priceable for Car {
    fn calculate_rental_cost(&self, days: i64) -> Money {
        let cost = self.info.base_rental_rate.multiply_days(days);
        if days > LONG_RENTAL_THRESHOLD_DAYS {
            cost.apply_percentage_discount(LONG_RENTAL_DISCOUNT_BPS)
        } else {
            cost
        }
    }

    fn is_available_for_rental(&self) -> bool {
        self.info.is_available()
    }
}

impl Rentable for Car {
    fn rent(&mut self, customer: &Customer, days: i64) -> RentalResult<RentalReceipt> {
        let cost = self.calculate_rental_cost(days);
        self.info.start_rental()?;

        debug!(
            vehicle_id = %self.info.vehicle_id,
            customer_id = %customer.customer_id(),
            days,
            cost = %cost,
            "Car rented"
        );

        Ok(RentalReceipt {
            customer_id: customer.customer_id().to_string(),
            customer_name: customer.name().to_string(),
            vehicle_id: self.info.vehicle_id.clone(),
            model: self.info.model.clone(),
            kind: VehicleKind::Car,
            days,
            cost,
        })
    }

    fn return_vehicle(&mut self) -> ReturnReceipt {
        let previous = self.info.end_rental();

        debug!(
            vehicle_id = %self.info.vehicle_id,
            previous = ?previous,
            "Car returned"
        );

        ReturnReceipt {
            vehicle_id: self.info.vehicle_id.clone(),
            model: self.info.model.clone(),
            kind: VehicleKind::Car,
            previous,
        }
    }
}

// =============================================================================
// Vehicle (sum over variants)
// =============================================================================

/// Any vehicle the agency can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Vehicle {
    Car(Car),
}

impl Vehicle {
    #[inline]
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Car(_) => VehicleKind::Car,
        }
    }

    #[inline]
    pub fn info(&self) -> &VehicleInfo {
        match self {
            Vehicle::Car(car) => car.info(),
        }
    }

    #[inline]
    pub fn info_mut(&mut self) -> &mut VehicleInfo {
        match self {
            Vehicle::Car(car) => car.info_mut(),
        }
    }

    pub fn vehicle_id(&self) -> &str {
        self.info().vehicle_id()
    }

    pub fn model(&self) -> &str {
        self.info().model()
    }

    pub fn base_rental_rate(&self) -> Money {
        self.info().base_rental_rate()
    }

    pub fn availability(&self) -> Availability {
        self.info().availability()
    }

    pub fn is_available(&self) -> bool {
        self.info().is_available()
    }

    pub fn set_available(&mut self, available: bool) {
        self.info_mut().set_available(available);
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        Vehicle::Car(car)
    }
}

impl Priceable for Vehicle {
    fn calculate_rental_cost(&self, days: i64) -> Money {
        match self {
            Vehicle::Car(car) => car.calculate_rental_cost(days),
        }
    }

    fn is_available_for_rental(&self) -> bool {
        match self {
            Vehicle::Car(car) => car.is_available_for_rental(),
        }
    }
}

impl Rentable for Vehicle {
    fn rent(&mut self, customer: &Customer, days: i64) -> RentalResult<RentalReceipt> {
        match self {
            Vehicle::Car(car) => car.rent(customer, days),
        }
    }

    fn return_vehicle(&mut self) -> ReturnReceipt {
        match self {
            Vehicle::Car(car) => car.return_vehicle(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
