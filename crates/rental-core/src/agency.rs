//! # Rental Agency
//!
//! Owns the fleet and routes rent/return calls to individual vehicles.
//!
//! ## Fleet Handles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_vehicle(car) ──► FleetIndex(0)                                    │
//! │  add_vehicle(car) ──► FleetIndex(1)   (duplicates are fine)            │
//! │                                                                         │
//! │  rent(FleetIndex(0), customer, days)   ──► RentalReceipt               │
//! │  return_vehicle(FleetIndex(0))         ──► ReturnReceipt               │
//! │                                                                         │
//! │  list_available_vehicles() ──► models of Available vehicles,           │
//! │                                in insertion order, read live           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The agency owns every vehicle; callers keep a [`FleetIndex`] instead of a
//! second reference. Vehicles are never removed, so an index stays valid for
//! the agency's lifetime.

use std::fmt;

use tracing::debug;

use crate::error::{RentalError, RentalResult};
use crate::receipt::{RentalReceipt, ReturnReceipt};
use crate::types::Customer;
use crate::vehicle::{Rentable, Vehicle};

/// Position of a vehicle in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FleetIndex(usize);

impl FleetIndex {
    #[inline]
    pub const fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for FleetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered, append-only fleet of vehicles.
#[derive(Debug, Clone, Default)]
pub struct RentalAgency {
    fleet: Vec<Vehicle>,
}

impl RentalAgency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vehicle to the fleet. No deduplication, no capacity limit.
    pub fn add_vehicle(&mut self, vehicle: impl Into<Vehicle>) -> FleetIndex {
        let vehicle = vehicle.into();
        let index = FleetIndex(self.fleet.len());

        debug!(
            vehicle_id = %vehicle.vehicle_id(),
            model = %vehicle.model(),
            position = index.0,
            "Vehicle registered"
        );

        self.fleet.push(vehicle);
        index
    }

    /// Models of the vehicles whose availability flag is set, in fleet order.
    ///
    /// The iterator is lazy and reads live state; call again to re-scan.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::{Car, Customer, Money, RentalAgency};
    ///
    /// let mut agency = RentalAgency::new();
    /// let accord = agency.add_vehicle(Car::new("C123", "Honda Accord", Money::from_cents(5000)).unwrap());
    /// agency.add_vehicle(Car::new("C456", "Toyota Corolla", Money::from_cents(4000)).unwrap());
    ///
    /// let jeff = Customer::new("CU01", "Jeff");
    /// agency.rent(accord, &jeff, 5).unwrap();
    ///
    /// let available: Vec<&str> = agency.list_available_vehicles().collect();
    /// assert_eq!(available, ["Toyota Corolla"]);
    /// ```
    pub fn list_available_vehicles(&self) -> impl Iterator<Item = &str> + '_ {
        self.fleet
            .iter()
            .filter(|vehicle| vehicle.is_available())
            .map(Vehicle::model)
    }

    pub fn vehicle(&self, index: FleetIndex) -> Option<&Vehicle> {
        self.fleet.get(index.0)
    }

    pub fn vehicle_mut(&mut self, index: FleetIndex) -> Option<&mut Vehicle> {
        self.fleet.get_mut(index.0)
    }

    /// First vehicle registered under `vehicle_id`.
    pub fn find_by_id(&self, vehicle_id: &str) -> Option<FleetIndex> {
        self.fleet
            .iter()
            .position(|vehicle| vehicle.vehicle_id() == vehicle_id)
            .map(FleetIndex)
    }

    /// Rents the vehicle at `index` to `customer`.
    pub fn rent(
        &mut self,
        index: FleetIndex,
        customer: &Customer,
        days: i64,
    ) -> RentalResult<RentalReceipt> {
        self.vehicle_mut(index)
            .ok_or(RentalError::VehicleNotFound(index.0))?
            .rent(customer, days)
    }

    /// Returns the vehicle at `index`.
    pub fn return_vehicle(&mut self, index: FleetIndex) -> RentalResult<ReturnReceipt> {
        Ok(self
            .vehicle_mut(index)
            .ok_or(RentalError::VehicleNotFound(index.0))?
            .return_vehicle())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.fleet.iter()
    }

    pub fn len(&self) -> usize {
        self.fleet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fleet.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::vehicle::Car;

    fn car(id: &str, model: &str) -> Car {
        Car::new(id, model, Money::from_cents(5000)).unwrap()
    }

    fn jeff() -> Customer {
        Customer::new("CU01", "Jeff")
    }

    #[test]
    fn test_new_agency_is_empty() {
        let agency = RentalAgency::new();
        assert!(agency.is_empty());
        assert_eq!(agency.list_available_vehicles().count(), 0);
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let mut agency = RentalAgency::new();
        agency.add_vehicle(car("C1", "Civic"));
        agency.add_vehicle(car("C2", "Accord"));
        agency.add_vehicle(car("C3", "Corolla"));

        let models: Vec<&str> = agency.list_available_vehicles().collect();
        assert_eq!(models, ["Civic", "Accord", "Corolla"]);
    }

    #[test]
    fn test_listing_skips_unavailable_and_reads_live_state() {
        let mut agency = RentalAgency::new();
        agency.add_vehicle(car("C1", "Civic"));
        let accord = agency.add_vehicle(car("C2", "Accord"));
        agency.add_vehicle(car("C3", "Corolla"));

        agency.rent(accord, &jeff(), 2).unwrap();
        let models: Vec<&str> = agency.list_available_vehicles().collect();
        assert_eq!(models, ["Civic", "Corolla"]);

        agency.return_vehicle(accord).unwrap();
        let models: Vec<&str> = agency.list_available_vehicles().collect();
        assert_eq!(models, ["Civic", "Accord", "Corolla"]);
    }

    #[test]
    fn test_listing_is_side_effect_free() {
        let mut agency = RentalAgency::new();
        agency.add_vehicle(car("C1", "Civic"));
        agency.add_vehicle(car("C2", "Accord"));

        let first: Vec<&str> = agency.list_available_vehicles().collect();
        let second: Vec<&str> = agency.list_available_vehicles().collect();
        assert_eq!(first, second);
        assert!(agency.iter().all(Vehicle::is_available));
    }

    #[test]
    fn test_listing_uses_the_availability_flag() {
        let mut agency = RentalAgency::new();
        let civic = agency.add_vehicle(car("C1", "Civic"));
        agency.vehicle_mut(civic).unwrap().set_available(false);
        assert_eq!(agency.list_available_vehicles().count(), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut agency = RentalAgency::new();
        let first = agency.add_vehicle(car("C1", "Civic"));
        let second = agency.add_vehicle(car("C1", "Civic"));

        assert_ne!(first, second);
        assert_eq!(agency.len(), 2);
        assert_eq!(agency.find_by_id("C1"), Some(first));

        agency.rent(first, &jeff(), 1).unwrap();
        let models: Vec<&str> = agency.list_available_vehicles().collect();
        assert_eq!(models, ["Civic"]);
    }

    #[test]
    fn test_rent_and_return_through_agency() {
        let mut agency = RentalAgency::new();
        let accord = agency.add_vehicle(car("C123", "Honda Accord"));

        let receipt = agency.rent(accord, &jeff(), 5).unwrap();
        assert_eq!(receipt.cost, Money::from_cents(25000));
        assert!(!agency.vehicle(accord).unwrap().is_available());

        assert!(matches!(
            agency.rent(accord, &jeff(), 5),
            Err(RentalError::VehicleUnavailable { .. })
        ));

        let returned = agency.return_vehicle(accord).unwrap();
        assert!(returned.ended_rental());
        assert!(agency.vehicle(accord).unwrap().is_available());
    }

    #[test]
    fn test_unknown_index_is_reported() {
        let mut other = RentalAgency::new();
        other.add_vehicle(car("C1", "Civic"));
        let stale = other.add_vehicle(car("C2", "Accord"));

        let mut agency = RentalAgency::new();
        assert!(agency.vehicle(stale).is_none());
        assert!(matches!(
            agency.rent(stale, &jeff(), 1),
            Err(RentalError::VehicleNotFound(1))
        ));
        assert!(matches!(
            agency.return_vehicle(stale),
            Err(RentalError::VehicleNotFound(1))
        ));
        assert_eq!(agency.find_by_id("C2"), None);
    }
}
