//! Person domain errors

use thiserror::Error;

/// Errors produced by name validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// First name is empty after trimming whitespace
    #[error("invalid first name")]
    EmptyFirst,

    /// Last name is empty after trimming whitespace
    #[error("invalid last name")]
    EmptyLast,
}

/// Errors produced by person construction and lifecycle operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PersonError {
    /// Student numbers are exactly nine characters and never blank
    #[error("bad student number: {0:?}")]
    BadStudentNumber(String),

    /// Teachers must declare a non-blank specialty
    #[error("bad specialty")]
    BadSpecialty,

    /// A death date can be recorded only once
    #[error("death date already recorded")]
    AlreadyDeceased,

    /// Registration was attempted without a record
    #[error("cannot register a non-person")]
    MissingRecord,
}
