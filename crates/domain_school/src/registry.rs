//! The school registry
//!
//! An append-only, insertion-ordered collection of person records. Records
//! are never removed; the only mutation after registration is the person's
//! own deceased transition.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use domain_person::{PersonError, PersonRecord};

use crate::report;

/// The ordered collection of person records maintained by the school
///
/// # Examples
///
/// ```rust
/// use core_kernel::CalendarDate;
/// use domain_person::{PersonName, PersonRecord};
/// use domain_school::Registry;
///
/// let mut registry = Registry::new();
/// let person = PersonRecord::new(
///     PersonName::new("jane", "doe").unwrap(),
///     CalendarDate::from_ymd(2000, 1, 1).unwrap(),
/// );
/// registry.register(Some(person)).unwrap();
///
/// let lines: Vec<String> = registry.roster().collect();
/// assert_eq!(lines, ["Jane Doe was born 2000-01-01 and is still alive"]);
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Registry {
    people: Vec<PersonRecord>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the registry
    ///
    /// The record keeps its insertion position for the lifetime of the
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::MissingRecord` when called with `None` (an
    /// absent record); the registry is left unchanged.
    pub fn register(&mut self, record: Option<PersonRecord>) -> Result<(), PersonError> {
        let record = record.ok_or(PersonError::MissingRecord)?;
        debug!(name = %record.name().pretty(), "registering person");
        self.people.push(record);
        Ok(())
    }

    /// Returns the number of registered records
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Returns the registered records in insertion order
    pub fn people(&self) -> &[PersonRecord] {
        &self.people
    }

    /// Returns the roster lines, lazily, in insertion order
    ///
    /// Each line is the variant-dispatched record description followed by
    /// the life-status clause; see [`report::roster_line`].
    pub fn roster(&self) -> impl Iterator<Item = String> + '_ {
        self.people.iter().map(report::roster_line)
    }

    /// Invokes `emit` once per record with its age/year report bounds
    ///
    /// `emit` receives the pretty name, the birth year, and the final year
    /// of the report: `reference_year` for the living, the death year
    /// otherwise. The reference year is always an explicit caller choice;
    /// the registry never consults a clock.
    pub fn ages_and_years<F>(&self, reference_year: i32, mut emit: F)
    where
        F: FnMut(&str, i32, i32),
    {
        for person in &self.people {
            let max_year = match person.died() {
                None => reference_year,
                Some(died) => died.year(),
            };
            emit(&person.name().pretty(), person.born().year(), max_year);
        }
    }

    /// Writes one roster line per record to `sink`
    ///
    /// Lines are newline-terminated. The registry itself is never modified
    /// by an export, so a failed write leaves no internal state to undo.
    ///
    /// # Errors
    ///
    /// Propagates the first I/O error from the sink.
    pub fn export_details<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        for person in &self.people {
            writeln!(sink, "{}", report::roster_line(person))?;
        }
        Ok(())
    }
}
