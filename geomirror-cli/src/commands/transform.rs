//! Transform command - look up a WGS84 point by id and project it freshly.

use crate::error::CliError;
use crate::output;
use crate::runner::{CliRunner, GlobalArgs};

/// Run the transform command.
///
/// A missing id is a normal outcome, reported on stdout with exit status 0.
pub fn run(global: &GlobalArgs, id: i64) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("transform");

    let service = runner.open_service()?;
    match service.transform_point(id).map_err(CliError::from)? {
        Some(point) => output::print_transform(&point),
        None => println!("Point with id {} not found in the WGS84 collection.", id),
    }
    Ok(())
}
