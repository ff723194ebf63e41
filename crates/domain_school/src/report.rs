//! Report line formatting
//!
//! The roster line is the shared shape for console output and the text
//! export. Formatting dispatches on the record's role: students carry their
//! student number in the parenthetical, teachers their specialty, and plain
//! people no parenthetical at all.

use domain_person::{PersonRecord, Role};

/// Formats the single-line roster entry for a record
///
/// ```text
/// Sam Lee (student number: 123456789) was born 2004-02-29 and is still alive
/// Jane Doe was born 2000-01-01 and died on Thursday 2022-09-15
/// ```
pub fn roster_line(person: &PersonRecord) -> String {
    let name = person.name().pretty();
    let born = person.born();
    let mut line = match person.role() {
        Role::Plain => format!("{} was born {}", name, born),
        Role::Student { student_number } => {
            format!("{} (student number: {}) was born {}", name, student_number, born)
        }
        Role::Teacher { specialty } => {
            format!("{} (specialty: {}) was born {}", name, specialty, born)
        }
    };
    match person.died() {
        None => line.push_str(" and is still alive"),
        Some(died) => {
            line.push_str(&format!(" and died on {} {}", died.weekday(), died));
        }
    }
    line
}

/// Expands one ages-and-years triple into its report lines
///
/// Produces one line per calendar year from `min_year` through `max_year`
/// inclusive, each carrying the age reached in that year:
///
/// ```text
/// Jane Doe: 2000 (age 0)
/// Jane Doe: 2001 (age 1)
/// ```
///
/// The range is empty when `max_year` is below `min_year`.
pub fn age_lines(label: &str, min_year: i32, max_year: i32) -> impl Iterator<Item = String> + '_ {
    (min_year..=max_year).map(move |year| format!("{}: {} (age {})", label, year, year - min_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CalendarDate;
    use domain_person::{PersonName, PersonRecord};

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_roster_line_for_each_role() {
        let plain = PersonRecord::new(PersonName::new("jane", "doe").unwrap(), date(2000, 1, 1));
        assert_eq!(
            roster_line(&plain),
            "Jane Doe was born 2000-01-01 and is still alive"
        );

        let student = PersonRecord::student(
            PersonName::new("sam", "lee").unwrap(),
            date(2004, 2, 29),
            "123456789",
        )
        .unwrap();
        assert_eq!(
            roster_line(&student),
            "Sam Lee (student number: 123456789) was born 2004-02-29 and is still alive"
        );

        let teacher = PersonRecord::teacher(
            PersonName::new("ada", "lovelace").unwrap(),
            date(1970, 5, 20),
            "mathematics",
        )
        .unwrap();
        assert_eq!(
            roster_line(&teacher),
            "Ada Lovelace (specialty: mathematics) was born 1970-05-20 and is still alive"
        );
    }

    #[test]
    fn test_roster_line_death_clause_carries_weekday() {
        let mut person =
            PersonRecord::new(PersonName::new("jane", "doe").unwrap(), date(2000, 1, 1));
        person.mark_deceased(date(2022, 9, 15)).unwrap();
        assert_eq!(
            roster_line(&person),
            "Jane Doe was born 2000-01-01 and died on Thursday 2022-09-15"
        );
    }

    #[test]
    fn test_age_lines_inclusive_range() {
        let lines: Vec<String> = age_lines("Jane Doe", 2000, 2002).collect();
        assert_eq!(
            lines,
            [
                "Jane Doe: 2000 (age 0)",
                "Jane Doe: 2001 (age 1)",
                "Jane Doe: 2002 (age 2)",
            ]
        );
    }

    #[test]
    fn test_age_lines_empty_when_max_precedes_min() {
        assert_eq!(age_lines("x", 2000, 1999).count(), 0);
    }
}
