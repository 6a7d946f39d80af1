//! List command - print stored points from one or both collections.

use geomirror::model::CrsSelection;

use crate::error::CliError;
use crate::output;
use crate::runner::{CliRunner, GlobalArgs};

/// Run the list command.
pub fn run(global: &GlobalArgs, selection: CrsSelection) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("list");

    let service = runner.open_service()?;
    let listing = service.list_points(selection).map_err(CliError::from)?;

    output::print_listing(&listing);
    Ok(())
}
