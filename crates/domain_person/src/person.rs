//! Person records and role variants
//!
//! A [`PersonRecord`] is created with a name and a birth date and may later
//! transition to a deceased state exactly once. Students and teachers are
//! role variants over the same shared fields rather than separate types, so
//! rendering and registry code dispatch with a single `match`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use core_kernel::CalendarDate;

use crate::error::PersonError;
use crate::name::PersonName;

/// Required length of a student number
pub const STUDENT_NUMBER_LEN: usize = 9;

/// The role a person plays in the school
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A person with no school-specific capability
    Plain,
    /// A student, identified by a nine-character student number
    Student { student_number: String },
    /// A teacher with a declared specialty
    Teacher { specialty: String },
}

/// A person known to the school registry
///
/// Equality and ordering consider the birth date only, delegating to
/// [`CalendarDate`] ordering; records born on the same day compare equal and
/// their relative order is left to the stable insertion order of the
/// registry.
///
/// # Examples
///
/// ```rust
/// use core_kernel::CalendarDate;
/// use domain_person::{PersonName, PersonRecord};
///
/// let name = PersonName::new("jane", "doe").unwrap();
/// let born = CalendarDate::from_ymd(2000, 1, 1).unwrap();
/// let person = PersonRecord::new(name, born);
/// assert!(person.is_alive());
/// assert_eq!(
///     person.to_string(),
///     "Jane Doe (J.D.) was born on Saturday 2000-01-01",
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    name: PersonName,
    born: CalendarDate,
    died: Option<CalendarDate>,
    role: Role,
}

impl PersonRecord {
    /// Creates a plain person from a name and birth date
    ///
    /// Construction cannot fail: the name and birth date are owned values
    /// that were themselves validated on construction.
    pub fn new(name: PersonName, born: CalendarDate) -> Self {
        Self {
            name,
            born,
            died: None,
            role: Role::Plain,
        }
    }

    /// Creates a student record
    ///
    /// # Errors
    ///
    /// Returns `PersonError::BadStudentNumber` unless the student number is
    /// exactly nine characters and not blank.
    pub fn student(
        name: PersonName,
        born: CalendarDate,
        student_number: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let student_number = student_number.into();
        if student_number.trim().is_empty()
            || student_number.chars().count() != STUDENT_NUMBER_LEN
        {
            return Err(PersonError::BadStudentNumber(student_number));
        }
        Ok(Self {
            name,
            born,
            died: None,
            role: Role::Student { student_number },
        })
    }

    /// Creates a teacher record
    ///
    /// # Errors
    ///
    /// Returns `PersonError::BadSpecialty` when the specialty is blank.
    pub fn teacher(
        name: PersonName,
        born: CalendarDate,
        specialty: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let specialty = specialty.into();
        if specialty.trim().is_empty() {
            return Err(PersonError::BadSpecialty);
        }
        Ok(Self {
            name,
            born,
            died: None,
            role: Role::Teacher { specialty },
        })
    }

    /// Returns the person's name
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the birth date
    pub fn born(&self) -> CalendarDate {
        self.born
    }

    /// Returns the death date, if one has been recorded
    pub fn died(&self) -> Option<CalendarDate> {
        self.died
    }

    /// Returns the person's role
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the student number for student records
    pub fn student_number(&self) -> Option<&str> {
        match &self.role {
            Role::Student { student_number } => Some(student_number),
            _ => None,
        }
    }

    /// Returns the specialty for teacher records
    pub fn specialty(&self) -> Option<&str> {
        match &self.role {
            Role::Teacher { specialty } => Some(specialty),
            _ => None,
        }
    }

    /// Returns true while no death date has been recorded
    pub fn is_alive(&self) -> bool {
        self.died.is_none()
    }

    /// Records the death date
    ///
    /// The transition happens at most once; there is no un-death. The death
    /// date is not checked against the birth date.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::AlreadyDeceased` when a death date has already
    /// been recorded.
    pub fn mark_deceased(&mut self, died: CalendarDate) -> Result<(), PersonError> {
        if self.died.is_some() {
            return Err(PersonError::AlreadyDeceased);
        }
        self.died = Some(died);
        Ok(())
    }
}

impl PartialEq for PersonRecord {
    fn eq(&self, other: &Self) -> bool {
        self.born == other.born
    }
}

impl Eq for PersonRecord {}

impl PartialOrd for PersonRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersonRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.born.cmp(&other.born)
    }
}

impl fmt::Display for PersonRecord {
    /// The per-record summary
    ///
    /// Plain people carry their initials in the parenthetical; students and
    /// teachers show their student number or specialty there instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parenthetical = match &self.role {
            Role::Plain => self.name.initials(),
            Role::Student { student_number } => format!("student number: {}", student_number),
            Role::Teacher { specialty } => format!("specialty: {}", specialty),
        };
        write!(
            f,
            "{} ({}) was born on {} {}",
            self.name.pretty(),
            parenthetical,
            self.born.weekday(),
            self.born,
        )?;
        if let Some(died) = self.died {
            write!(f, " and died on {} {}", died.weekday(), died)?;
        }
        Ok(())
    }
}
