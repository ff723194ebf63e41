//! Reporting layer for the school registry
//!
//! Owns everything outside the domain: environment-driven configuration,
//! tracing initialization, console printing of the reports, and the
//! flat-text export file.

pub mod config;
pub mod logging;
pub mod output;

pub use config::ReportConfig;
