//! Init command - create both point tables, discarding existing data.

use crate::error::CliError;
use crate::runner::{CliRunner, GlobalArgs};

/// Run the init command.
pub fn run(global: &GlobalArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("init");

    println!(
        "Initializing point collections in {}",
        runner.database_path().display()
    );

    let mut service = runner.open_service()?;
    service.initialize().map_err(CliError::from)?;

    println!("Created empty WGS84 and Web Mercator tables.");
    Ok(())
}
