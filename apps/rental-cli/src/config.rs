//! Scenario configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The defaults reproduce the canonical run.

use std::env;

use rental_core::Money;

/// Scenario configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Identifier of the car to register
    pub vehicle_id: String,

    /// Model name of the car
    pub vehicle_model: String,

    /// Daily base rate
    pub base_rate: Money,

    /// Renting customer's identifier
    pub customer_id: String,

    /// Renting customer's name
    pub customer_name: String,

    /// Rental length in days (not validated)
    pub days: i64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            vehicle_id: "C123".to_string(),
            vehicle_model: "Honda Accord".to_string(),
            base_rate: Money::from_cents(5000),
            customer_id: "CU01".to_string(),
            customer_name: "Jeff".to_string(),
            days: 5,
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ScenarioConfig::default();

        let base_rate = match lookup("RENTAL_BASE_RATE") {
            Some(raw) => Money::parse(&raw)
                .map_err(|_| ConfigError::InvalidValue("RENTAL_BASE_RATE".to_string()))?,
            None => defaults.base_rate,
        };

        let days = match lookup("RENTAL_DAYS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RENTAL_DAYS".to_string()))?,
            None => defaults.days,
        };

        Ok(ScenarioConfig {
            vehicle_id: lookup("RENTAL_VEHICLE_ID").unwrap_or(defaults.vehicle_id),
            vehicle_model: lookup("RENTAL_VEHICLE_MODEL").unwrap_or(defaults.vehicle_model),
            base_rate,
            customer_id: lookup("RENTAL_CUSTOMER_ID").unwrap_or(defaults.customer_id),
            customer_name: lookup("RENTAL_CUSTOMER_NAME").unwrap_or(defaults.customer_name),
            days,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_canonical_scenario() {
        let config = ScenarioConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ScenarioConfig::default());
        assert_eq!(config.vehicle_id, "C123");
        assert_eq!(config.base_rate.to_decimal_string(), "50.00");
        assert_eq!(config.days, 5);
    }

    #[test]
    fn test_overrides() {
        let config = ScenarioConfig::from_lookup(lookup_in(&[
            ("RENTAL_VEHICLE_MODEL", "Toyota Corolla"),
            ("RENTAL_BASE_RATE", "42.50"),
            ("RENTAL_CUSTOMER_NAME", "Ana"),
            ("RENTAL_DAYS", " 10 "),
        ]))
        .unwrap();

        assert_eq!(config.vehicle_model, "Toyota Corolla");
        assert_eq!(config.base_rate, Money::from_cents(4250));
        assert_eq!(config.customer_name, "Ana");
        assert_eq!(config.days, 10);
        assert_eq!(config.vehicle_id, "C123");
    }

    #[test]
    fn test_invalid_values() {
        let err = ScenarioConfig::from_lookup(lookup_in(&[("RENTAL_BASE_RATE", "fifty")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RENTAL_BASE_RATE");

        let err =
            ScenarioConfig::from_lookup(lookup_in(&[("RENTAL_DAYS", "a week")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RENTAL_DAYS");
    }

    #[test]
    fn test_negative_days_are_accepted() {
        let config = ScenarioConfig::from_lookup(lookup_in(&[("RENTAL_DAYS", "-2")])).unwrap();
        assert_eq!(config.days, -2);
    }
}
