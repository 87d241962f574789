//! # Rental CLI
//!
//! Runs the rental scenario and prints the transcript to stdout.
//!
//! ```text
//! Honda Accord
//! Jeff rented Car: Honda Accord for 5 days at a cost of 250.00
//! Car returned: Honda Accord
//! ```

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rental_cli::{run, ScenarioConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let config = ScenarioConfig::load()?;
    info!(
        vehicle_id = %config.vehicle_id,
        customer_id = %config.customer_id,
        days = config.days,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;

    info!("Scenario complete");
    Ok(())
}
