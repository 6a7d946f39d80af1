//! Demo command - a full demonstration sequence against a fresh store.

use geomirror::model::CrsSelection;

use crate::error::CliError;
use crate::output;
use crate::runner::{CliRunner, GlobalArgs};

/// Landmark points used by the demonstration.
const DEMO_POINTS: &[(&str, f64, f64)] = &[
    ("Eiffel Tower", 2.2945, 48.8584),
    ("Statue of Liberty", -74.0445, 40.6892),
    ("Sydney Opera House", 151.2153, -33.8568),
];

/// Run the demo command: reset, add landmarks, list both collections, then
/// transform the first point.
pub fn run(global: &GlobalArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(global)?;
    runner.log_startup("demo");

    println!("GeoMirror demonstration");
    println!("=======================");
    println!();

    let mut service = runner.open_service()?;

    println!(
        "Resetting point collections in {}",
        runner.database_path().display()
    );
    service.initialize().map_err(CliError::from)?;
    println!();

    let mut first_id = None;
    for (name, lon, lat) in DEMO_POINTS {
        let (primary_id, mirror_id) = service
            .add_point(name, *lon, *lat)
            .map_err(CliError::from)?;
        println!(
            "Added \"{}\" (WGS84 id {}, Web Mercator id {})",
            name, primary_id, mirror_id
        );
        first_id.get_or_insert(primary_id);
    }
    println!();

    let listing = service
        .list_points(CrsSelection::Both)
        .map_err(CliError::from)?;
    output::print_listing(&listing);
    println!();

    if let Some(id) = first_id {
        println!("Fresh projection of point {}:", id);
        if let Some(point) = service.transform_point(id).map_err(CliError::from)? {
            output::print_transform(&point);
        }
    }

    println!();
    println!("Demonstration complete.");
    Ok(())
}
