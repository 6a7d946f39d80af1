//! Result formatting for command output.
//!
//! Renders engine read results as bordered tables. Formatting lives entirely
//! here: the engine returns structured records and never prints.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, Table};

use geomirror::model::{MirrorRecord, PointListing, PrimaryRecord, TransformedPoint};

/// Degrees are printed with 6 decimals (~0.1 m of longitude at the equator).
fn degrees(value: f64) -> String {
    format!("{:.6}", value)
}

/// Meters are printed with 2 decimals.
fn meters(value: f64) -> String {
    format!("{:.2}", value)
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).set_alignment(CellAlignment::Center))
        .collect();
    table.set_header(header_cells);

    table
}

fn row_summary(count: usize) -> String {
    format!("{} row{}", count, if count == 1 { "" } else { "s" })
}

/// Render the primary (WGS84) collection as a table.
pub fn primary_table(records: &[PrimaryRecord]) -> String {
    let mut table = new_table(&["ID", "Name", "Longitude", "Latitude", "Created"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.id).set_alignment(CellAlignment::Right),
            Cell::new(&record.name),
            Cell::new(degrees(record.lon)).set_alignment(CellAlignment::Right),
            Cell::new(degrees(record.lat)).set_alignment(CellAlignment::Right),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    format!("{}\n{}", table, row_summary(records.len()))
}

/// Render the mirror (Web Mercator) collection as a table.
pub fn mirror_table(records: &[MirrorRecord]) -> String {
    let mut table = new_table(&["ID", "Name", "X (m)", "Y (m)", "Created"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.id).set_alignment(CellAlignment::Right),
            Cell::new(&record.name),
            Cell::new(meters(record.x)).set_alignment(CellAlignment::Right),
            Cell::new(meters(record.y)).set_alignment(CellAlignment::Right),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    format!("{}\n{}", table, row_summary(records.len()))
}

/// Print a listing, one labeled table per queried collection.
pub fn print_listing(listing: &PointListing) {
    if let Some(primary) = &listing.primary {
        println!("Points (WGS84 lon/lat):");
        println!("{}", primary_table(primary));
    }
    if let Some(mirror) = &listing.mirror {
        if listing.primary.is_some() {
            println!();
        }
        println!("Points (Web Mercator x/y):");
        println!("{}", mirror_table(mirror));
    }
}

/// Print the combined transform view of a single point.
pub fn print_transform(point: &TransformedPoint) {
    println!("Point {} \"{}\"", point.id, point.name);
    println!("  WGS84 (stored):");
    println!("    longitude: {}", degrees(point.lon));
    println!("    latitude:  {}", degrees(point.lat));
    println!("  Web Mercator (recomputed):");
    println!("    x: {} m", meters(point.x));
    println!("    y: {} m", meters(point.y));
    println!("  created: {}", point.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
}
