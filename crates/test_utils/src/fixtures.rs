//! Canonical test data
//!
//! Fixed dates and names whose derived properties (weekday, leap status,
//! rendering) are known, so tests can assert exact output.

use core_kernel::CalendarDate;
use domain_person::PersonName;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

/// Dates with known calendar properties
pub struct DateFixtures;

impl DateFixtures {
    /// 2000-01-01, the Saturday anchor used across the weekday tests
    pub fn anchor_saturday() -> CalendarDate {
        CalendarDate::from_ymd(2000, 1, 1).expect("fixture date is valid")
    }

    /// 2024-02-29, a leap day
    pub fn leap_day() -> CalendarDate {
        CalendarDate::from_ymd(2024, 2, 29).expect("fixture date is valid")
    }

    /// 1999-12-31, the last day before the anchor
    pub fn year_end() -> CalendarDate {
        CalendarDate::from_ymd(1999, 12, 31).expect("fixture date is valid")
    }
}

/// Names with known rendering
pub struct NameFixtures;

impl NameFixtures {
    /// Lowercase input whose pretty form is "Jane Doe" and initials "J.D."
    pub fn jane_doe() -> PersonName {
        PersonName::new("jane", "doe").expect("fixture name is valid")
    }

    /// A random realistic name, for tests that only need some valid name
    pub fn random() -> PersonName {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        PersonName::new(first, last).expect("generated name is non-empty")
    }
}
