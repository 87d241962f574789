//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── RentalError      - Domain errors (invalid state, lookups)         │
//! │  └── ValidationError  - Constructor argument failures                  │
//! │                                                                         │
//! │  rental-cli errors (in app)                                            │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── anyhow::Error    - What the operator sees on stderr               │
//! │                                                                         │
//! │  Flow: ValidationError → RentalError → anyhow::Error → exit code 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (vehicle ID, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Rental Error
// =============================================================================

/// Rental business logic errors.
#[derive(Debug, Error)]
pub enum RentalError {
    /// Vehicle is already rented out.
    ///
    /// ## When This Occurs
    /// - Calling `rent` twice without a `return_vehicle` in between
    /// - Two callers racing for the same car through a shared agency
    ///
    /// ## User Workflow
    /// ```text
    /// rent(Jeff, 5 days)  ──► Available → Rented      ✓
    ///      │
    ///      ▼
    /// rent(Ana, 2 days)   ──► VehicleUnavailable      ✗ (state unchanged)
    /// ```
    #[error("Vehicle {vehicle_id} ({model}) is not available")]
    VehicleUnavailable { vehicle_id: String, model: String },

    /// Fleet index does not name a registered vehicle.
    #[error("No vehicle at fleet position {0}")]
    VehicleNotFound(usize),

    /// A thread panicked while holding the shared agency lock.
    #[error("Agency lock poisoned")]
    LockPoisoned,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by `Car::new` and by `Money::parse`. These are the
/// invalid-argument failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RentalError::VehicleUnavailable {
            vehicle_id: "C123".to_string(),
            model: "Honda Accord".to_string(),
        };
        assert_eq!(err.to_string(), "Vehicle C123 (Honda Accord) is not available");

        assert_eq!(
            RentalError::VehicleNotFound(3).to_string(),
            "No vehicle at fleet position 3"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "vehicle_id".to_string(),
        };
        assert_eq!(err.to_string(), "vehicle_id is required");

        let err = ValidationError::MustBePositive {
            field: "base_rental_rate".to_string(),
        };
        assert_eq!(err.to_string(), "base_rental_rate must be positive");
    }

    #[test]
    fn test_validation_converts_to_rental_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let rental_err: RentalError = validation_err.into();
        assert!(matches!(rental_err, RentalError::Validation(_)));
    }
}
