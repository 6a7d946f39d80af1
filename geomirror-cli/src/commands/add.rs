//! Add command - insert a point into both collections atomically.

use crate::error::CliError;
use crate::runner::{CliRunner, GlobalArgs};

/// Arguments for the add command.
pub struct AddArgs {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// Run the add command.
pub fn run(global: &GlobalArgs, args: AddArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("add");

    println!(
        "Adding point \"{}\" (lon: {}, lat: {})",
        args.name, args.lon, args.lat
    );

    let mut service = runner.open_service()?;
    let (primary_id, mirror_id) = service
        .add_point(&args.name, args.lon, args.lat)
        .map_err(CliError::from)?;

    println!("  WGS84 record id:        {}", primary_id);
    println!("  Web Mercator record id: {}", mirror_id);
    println!("Point added to both collections.");
    Ok(())
}
