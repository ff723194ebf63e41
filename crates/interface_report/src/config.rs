//! Report configuration

use serde::Deserialize;

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Reference year used as the upper bound of the ages-and-years report
    /// for people who are still alive
    pub reference_year: i32,
    /// Path of the flat-text export file
    pub export_path: String,
    /// Log level
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reference_year: 2022,
            export_path: "people.txt".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("SCHOOL"))
            .build()?
            .try_deserialize()
    }
}
