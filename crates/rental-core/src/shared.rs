//! # Shared Agency
//!
//! A cloneable handle for callers on several threads.
//!
//! ## Thread Safety
//! The agency is wrapped in `Arc<Mutex<T>>` because:
//! 1. The fleet and every vehicle's availability must change together
//! 2. Only one caller should rent or return at a time
//! 3. Two racing `rent` calls on one car must not both succeed
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  thread A ──► rent(car) ──┐                                            │
//! │                           ├──► Mutex<RentalAgency> ──► one winner      │
//! │  thread B ──► rent(car) ──┘                             one Unavailable │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::agency::{FleetIndex, RentalAgency};
use crate::error::{RentalError, RentalResult};
use crate::receipt::{RentalReceipt, ReturnReceipt};
use crate::types::Customer;
use crate::vehicle::Vehicle;

/// Mutex-guarded agency. Clones share the same fleet.
#[derive(Debug, Clone, Default)]
pub struct SharedAgency {
    inner: Arc<Mutex<RentalAgency>>,
}

impl SharedAgency {
    pub fn new(agency: RentalAgency) -> Self {
        SharedAgency {
            inner: Arc::new(Mutex::new(agency)),
        }
    }

    fn lock(&self) -> RentalResult<MutexGuard<'_, RentalAgency>> {
        self.inner.lock().map_err(|_| RentalError::LockPoisoned)
    }

    pub fn add_vehicle(&self, vehicle: impl Into<Vehicle>) -> RentalResult<FleetIndex> {
        Ok(self.lock()?.add_vehicle(vehicle))
    }

    /// Snapshot of available models, taken under the lock.
    pub fn available_models(&self) -> RentalResult<Vec<String>> {
        Ok(self
            .lock()?
            .list_available_vehicles()
            .map(str::to_string)
            .collect())
    }

    pub fn rent(
        &self,
        index: FleetIndex,
        customer: &Customer,
        days: i64,
    ) -> RentalResult<RentalReceipt> {
        self.lock()?.rent(index, customer, days)
    }

    pub fn return_vehicle(&self, index: FleetIndex) -> RentalResult<ReturnReceipt> {
        self.lock()?.return_vehicle(index)
    }

    /// Runs `f` with the lock held.
    pub fn with_agency<T>(&self, f: impl FnOnce(&RentalAgency) -> T) -> RentalResult<T> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
