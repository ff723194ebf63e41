//! Test data builders
//!
//! Builders construct person records with sensible defaults so tests only
//! spell out the fields they actually care about.

use core_kernel::CalendarDate;
use domain_person::{PersonName, PersonRecord};

use crate::fixtures::{DateFixtures, NameFixtures};

enum RoleChoice {
    Plain,
    Student(String),
    Teacher(String),
}

/// Builder for person records
///
/// Defaults to a plain, living "Jane Doe" born on the Saturday anchor date.
pub struct TestPersonBuilder {
    name: PersonName,
    born: CalendarDate,
    died: Option<CalendarDate>,
    role: RoleChoice,
}

impl Default for TestPersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPersonBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            name: NameFixtures::jane_doe(),
            born: DateFixtures::anchor_saturday(),
            died: None,
            role: RoleChoice::Plain,
        }
    }

    /// Sets the name from raw parts
    pub fn with_name(mut self, first: &str, last: &str) -> Self {
        self.name = PersonName::new(first, last).expect("builder name must be valid");
        self
    }

    /// Sets the birth date
    pub fn born_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.born = CalendarDate::from_ymd(year, month, day).expect("builder date must be valid");
        self
    }

    /// Marks the built record deceased on the given date
    pub fn died_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.died =
            Some(CalendarDate::from_ymd(year, month, day).expect("builder date must be valid"));
        self
    }

    /// Builds a student with the given student number
    pub fn as_student(mut self, student_number: impl Into<String>) -> Self {
        self.role = RoleChoice::Student(student_number.into());
        self
    }

    /// Builds a teacher with the given specialty
    pub fn as_teacher(mut self, specialty: impl Into<String>) -> Self {
        self.role = RoleChoice::Teacher(specialty.into());
        self
    }

    /// Builds the record
    pub fn build(self) -> PersonRecord {
        let mut person = match self.role {
            RoleChoice::Plain => PersonRecord::new(self.name, self.born),
            RoleChoice::Student(number) => PersonRecord::student(self.name, self.born, number)
                .expect("builder student number must be valid"),
            RoleChoice::Teacher(specialty) => PersonRecord::teacher(self.name, self.born, specialty)
                .expect("builder specialty must be valid"),
        };
        if let Some(died) = self.died {
            person
                .mark_deceased(died)
                .expect("builder marks deceased at most once");
        }
        person
    }
}
