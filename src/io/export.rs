//! CSV export of the breakdown table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::projection::{Projection, round_to};

/// Column header for the breakdown CSV.
const HEADER: &str = "category,energy_kwh,percentage,cost";

/// Exports the breakdown table to a CSV file at the given path.
///
/// Writes a header row followed by one row per breakdown line. Percentage is
/// rounded to one decimal and cost to whole currency units, as in the table
/// shown on screen.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(projection: &Projection, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(projection, buf)
}

/// Writes the breakdown table as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(projection: &Projection, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for row in &projection.rows {
        wtr.write_record(&[
            row.category.to_string(),
            format!("{:.1}", row.energy_kwh),
            format!("{:.1}", round_to(row.percentage, 1)),
            format!("{:.0}", round_to(row.cost, 0)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
