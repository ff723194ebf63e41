//! School registry report binary
//!
//! Seeds a demonstration registry, prints the roster and the ages-and-years
//! report to the console, and writes the flat-text export file.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin school-report
//!
//! # Run with environment variables
//! SCHOOL_REFERENCE_YEAR=2024 SCHOOL_EXPORT_PATH=/tmp/people.txt cargo run --bin school-report
//! ```
//!
//! # Environment Variables
//!
//! * `SCHOOL_REFERENCE_YEAR` - Upper bound of the ages-and-years report for
//!   living people (default: 2022)
//! * `SCHOOL_EXPORT_PATH` - Export file path (default: people.txt)
//! * `SCHOOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error
//!   (default: info)

use core_kernel::CalendarDate;
use domain_person::{PersonName, PersonRecord};
use domain_school::Registry;
use interface_report::{logging, output, ReportConfig};

/// Main entry point for the report binary.
///
/// Initializes logging, loads configuration, seeds the demonstration
/// registry, prints both reports, and writes the export file.
///
/// # Errors
///
/// Returns an error when the demonstration records fail validation. An
/// export failure is logged and does not abort the run.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    logging::init_tracing(&config.log_level);

    tracing::info!(
        reference_year = config.reference_year,
        export_path = %config.export_path,
        "Starting school registry report"
    );

    let registry = seed_registry()?;

    output::print_roster(&registry);
    output::print_ages_and_years(&registry, config.reference_year);

    if let Err(e) = output::export_to_file(&registry, &config.export_path) {
        tracing::error!(error = %e, path = %config.export_path, "Failed to write export file");
    }

    Ok(())
}

/// Loads report configuration from environment variables.
///
/// Falls back to individual env vars, then to defaults, when the prefixed
/// source cannot be deserialized as a whole.
fn load_config() -> ReportConfig {
    ReportConfig::from_env().unwrap_or_else(|_| {
        let defaults = ReportConfig::default();
        ReportConfig {
            reference_year: std::env::var("SCHOOL_REFERENCE_YEAR")
                .ok()
                .and_then(|y| y.parse().ok())
                .unwrap_or(defaults.reference_year),
            export_path: std::env::var("SCHOOL_EXPORT_PATH")
                .unwrap_or(defaults.export_path),
            log_level: std::env::var("SCHOOL_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Builds the demonstration registry: one plain person, one deceased plain
/// person, one student, and one teacher.
fn seed_registry() -> Result<Registry, Box<dyn std::error::Error>> {
    let mut registry = Registry::new();

    registry.register(Some(PersonRecord::new(
        PersonName::new("jane", "doe")?,
        CalendarDate::from_ymd(2000, 1, 1)?,
    )))?;

    let mut einstein = PersonRecord::new(
        PersonName::new("albert", "einstein")?,
        CalendarDate::from_ymd(1879, 3, 14)?,
    );
    einstein.mark_deceased(CalendarDate::from_ymd(1955, 4, 18)?)?;
    registry.register(Some(einstein))?;

    registry.register(Some(PersonRecord::student(
        PersonName::new("sam", "lee")?,
        CalendarDate::from_ymd(2004, 2, 29)?,
        "123456789",
    )?))?;

    registry.register(Some(PersonRecord::teacher(
        PersonName::new("ada", "lovelace")?,
        CalendarDate::from_ymd(1970, 5, 20)?,
        "mathematics",
    )?))?;

    Ok(registry)
}
