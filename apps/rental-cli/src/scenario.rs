//! The fixed rental scenario.
//!
//! ```text
//! add car ──► list ──► rent ──► list ──► return
//! ```
//!
//! Output goes to the supplied writer so tests can capture it; `main` passes
//! stdout.

use std::io::Write;

use anyhow::Context;
use rental_core::{Car, Customer, RentalAgency};
use tracing::info;

use crate::config::ScenarioConfig;

/// Runs the scenario, writing model listings and receipts to `out`.
pub fn run<W: Write>(config: &ScenarioConfig, out: &mut W) -> anyhow::Result<()> {
    let mut agency = RentalAgency::new();

    let car = Car::new(
        config.vehicle_id.as_str(),
        config.vehicle_model.as_str(),
        config.base_rate,
    )
    .context("Failed to create car")?;
    let customer = Customer::new(config.customer_id.as_str(), config.customer_name.as_str());

    let car = agency.add_vehicle(car);
    info!(vehicle_id = %config.vehicle_id, fleet_index = %car, "Car added to fleet");

    write_available(&agency, out)?;

    let receipt = agency
        .rent(car, &customer, config.days)
        .context("Rental failed")?;
    info!(cost = %receipt.cost, days = receipt.days, "Rental recorded");
    writeln!(out, "{receipt}")?;

    write_available(&agency, out)?;

    let returned = agency.return_vehicle(car).context("Return failed")?;
    info!(ended_rental = returned.ended_rental(), "Return recorded");
    writeln!(out, "{returned}")?;

    Ok(())
}

fn write_available<W: Write>(agency: &RentalAgency, out: &mut W) -> anyhow::Result<()> {
    for model in agency.list_available_vehicles() {
        writeln!(out, "{model}")?;
    }
    Ok(())
}
