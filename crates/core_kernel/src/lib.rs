//! Core Kernel - foundational types for the school registry
//!
//! This crate provides the building blocks used across the domain modules:
//! - Validated calendar dates with self-contained Gregorian arithmetic
//! - Weekday derivation via a pure anchor-day formula

pub mod calendar;

pub use calendar::{days_in_month, is_leap_year, CalendarDate, CalendarError, Weekday};
