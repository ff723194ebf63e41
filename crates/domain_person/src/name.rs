//! Person names
//!
//! A name holds a trimmed, non-empty first and last part and derives the
//! initials and the pretty-printed form used by the reports.

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// A person's first and last name
///
/// Both parts are trimmed on construction and guaranteed non-empty.
///
/// # Examples
///
/// ```rust
/// use domain_person::PersonName;
///
/// let name = PersonName::new("jane", "doe").unwrap();
/// assert_eq!(name.pretty(), "Jane Doe");
/// assert_eq!(name.initials(), "J.D.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    /// Creates a name from first and last parts
    ///
    /// # Errors
    ///
    /// Returns `NameError` when either part is empty after trimming.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Result<Self, NameError> {
        let first = first.into();
        let first = first.trim();
        if first.is_empty() {
            return Err(NameError::EmptyFirst);
        }
        let last = last.into();
        let last = last.trim();
        if last.is_empty() {
            return Err(NameError::EmptyLast);
        }
        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }

    /// Returns the trimmed first name as given
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the trimmed last name as given
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Returns the uppercased, dot-separated initials, e.g. "J.D."
    pub fn initials(&self) -> String {
        let first = self.first.chars().next().expect("validated non-empty");
        let last = self.last.chars().next().expect("validated non-empty");
        format!("{}.{}.", first.to_uppercase(), last.to_uppercase())
    }

    /// Returns the full name with each part capitalized, e.g. "Jane Doe"
    pub fn pretty(&self) -> String {
        format!("{} {}", capitalized(&self.first), capitalized(&self.last))
    }
}

/// First character uppercased, remainder lowercased.
fn capitalized(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_name_and_initials() {
        let name = PersonName::new("jane", "doe").unwrap();
        assert_eq!(name.pretty(), "Jane Doe");
        assert_eq!(name.initials(), "J.D.");
    }

    #[test]
    fn test_parts_are_trimmed() {
        let name = PersonName::new("  ada \t", " lovelace ").unwrap();
        assert_eq!(name.first(), "ada");
        assert_eq!(name.last(), "lovelace");
        assert_eq!(name.pretty(), "Ada Lovelace");
    }

    #[test]
    fn test_mixed_case_is_normalized() {
        let name = PersonName::new("ARTHUR", "mcDONALD").unwrap();
        assert_eq!(name.pretty(), "Arthur Mcdonald");
        assert_eq!(name.initials(), "A.M.");
    }

    #[test]
    fn test_empty_parts_are_rejected() {
        assert_eq!(PersonName::new("", "doe"), Err(NameError::EmptyFirst));
        assert_eq!(PersonName::new("   ", "doe"), Err(NameError::EmptyFirst));
        assert_eq!(PersonName::new("jane", ""), Err(NameError::EmptyLast));
        assert_eq!(PersonName::new("jane", " \t "), Err(NameError::EmptyLast));
    }
}
