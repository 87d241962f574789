//! # Validation Module
//!
//! Constructor guards for vehicles. Customers carry no guards.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Car::new(id, model, rate)                                             │
//! │  ├── validate_vehicle_id    → Required if empty                        │
//! │  ├── validate_model         → Required if empty                        │
//! │  └── validate_base_rental_rate → MustBePositive if rate <= 0           │
//! │                                                                         │
//! │  Nothing else is validated: customers and day counts pass through.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::{validate_vehicle_id, validate_base_rental_rate};
//! use rental_core::Money;
//!
//! assert!(validate_vehicle_id("C123").is_ok());
//! assert!(validate_base_rental_rate(Money::zero()).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn require_non_empty(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a vehicle identifier.
///
/// ## Rules
/// - Must not be empty (whitespace is kept as given)
pub fn validate_vehicle_id(vehicle_id: &str) -> ValidationResult<()> {
    require_non_empty("vehicle_id", vehicle_id)
}

/// Validates a vehicle model name.
///
/// ## Rules
/// - Must not be empty (whitespace is kept as given)
pub fn validate_model(model: &str) -> ValidationResult<()> {
    require_non_empty("model", model)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily base rental rate.
///
/// ## Rules
/// - Must be strictly positive (> 0)
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_base_rental_rate;
/// use rental_core::Money;
///
/// assert!(validate_base_rental_rate(Money::from_cents(5000)).is_ok());
/// assert!(validate_base_rental_rate(Money::from_cents(1)).is_ok());
/// assert!(validate_base_rental_rate(Money::zero()).is_err());
/// assert!(validate_base_rental_rate(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_base_rental_rate(rate: Money) -> ValidationResult<()> {
    if !rate.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "base_rental_rate".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
