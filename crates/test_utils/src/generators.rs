//! Property-based test generators
//!
//! Proptest strategies producing random values that respect the domain
//! invariants: generated dates pick their day from the real month length,
//! and generated records pass the validating constructors.

use core_kernel::{days_in_month, CalendarDate};
use domain_person::{PersonName, PersonRecord};
use proptest::prelude::*;

/// Strategy for valid calendar dates across the full year range
pub fn date_strategy() -> impl Strategy<Value = CalendarDate> {
    date_strategy_in(1, 9999)
}

/// Strategy for valid dates within the weekday formula's supported centuries
pub fn supported_century_date_strategy() -> impl Strategy<Value = CalendarDate> {
    date_strategy_in(1600, 2199)
}

/// Strategy for valid dates with years drawn from the given inclusive range
pub fn date_strategy_in(min_year: i32, max_year: i32) -> impl Strategy<Value = CalendarDate> {
    (min_year..=max_year, 1u32..=12)
        .prop_flat_map(|(year, month)| {
            let length = days_in_month(year, month).expect("month in range");
            (Just(year), Just(month), 1u32..=length)
        })
        .prop_map(|(year, month, day)| {
            CalendarDate::from_ymd(year, month, day).expect("generated date is valid")
        })
}

/// Strategy for valid person names
pub fn name_strategy() -> impl Strategy<Value = PersonName> {
    ("[a-z]{1,12}", "[a-z]{1,12}")
        .prop_map(|(first, last)| PersonName::new(first, last).expect("generated name is valid"))
}

/// Strategy for person records covering all three roles
pub fn person_strategy() -> impl Strategy<Value = PersonRecord> {
    prop_oneof![
        (name_strategy(), date_strategy())
            .prop_map(|(name, born)| PersonRecord::new(name, born)),
        (name_strategy(), date_strategy(), "[0-9]{9}").prop_map(|(name, born, number)| {
            PersonRecord::student(name, born, number).expect("generated student number is valid")
        }),
        (name_strategy(), date_strategy(), "[a-z]{3,12}").prop_map(|(name, born, specialty)| {
            PersonRecord::teacher(name, born, specialty).expect("generated specialty is valid")
        }),
    ]
}
