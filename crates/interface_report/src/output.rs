//! Console and file output for the registry reports

use std::fs::File;
use std::io;
use std::path::Path;

use domain_school::{report, Registry};
use tracing::info;

/// Prints one roster line per registered record
pub fn print_roster(registry: &Registry) {
    for line in registry.roster() {
        println!("{}", line);
    }
}

/// Prints the ages-and-years report
///
/// One line per calendar year of each person's reported life span, bounded
/// by `reference_year` for the living.
pub fn print_ages_and_years(registry: &Registry, reference_year: i32) {
    registry.ages_and_years(reference_year, |label, min_year, max_year| {
        for line in report::age_lines(label, min_year, max_year) {
            println!("{}", line);
        }
    });
}

/// Writes the registry details to the file at `path`
///
/// The file is created if missing and truncated otherwise, so each export
/// fully replaces the previous one. The file handle is released when this
/// function returns, on success and failure alike.
///
/// # Errors
///
/// Propagates file creation and write errors; the registry itself is
/// unaffected by a failed export.
pub fn export_to_file(registry: &Registry, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    registry.export_details(&mut file)?;
    info!(path = %path.display(), people = registry.len(), "exported registry details");
    Ok(())
}
