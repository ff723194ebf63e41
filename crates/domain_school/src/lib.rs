//! School registry domain
//!
//! The [`Registry`] keeps an insertion-ordered, append-only collection of
//! person records and produces the roster, ages-and-years, and export
//! reports over it.

pub mod registry;
pub mod report;

pub use registry::Registry;
