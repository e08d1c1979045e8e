use std::str::FromStr;

use log::LevelFilter;

pub const LOG_LEVEL_VAR: &str = "FITTRACK_LOG";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub log_level: LevelFilter,
}

impl Settings {
    /// Read the settings from the environment.
    ///
    /// Invalid values are replaced by their defaults. The error describing the invalid value is
    /// returned alongside, so that it can be reported once logging is set up.
    #[must_use]
    pub fn from_env() -> (Self, Option<SettingsError>) {
        Self::from_log_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref())
    }

    fn from_log_level(value: Option<&str>) -> (Self, Option<SettingsError>) {
        let default = Self::default();
        match value.map(str::trim) {
            None | Some("") => (default, None),
            Some(value) => match LevelFilter::from_str(value) {
                Ok(log_level) => (Self { log_level }, None),
                Err(_) => (
                    default,
                    Some(SettingsError::InvalidLogLevel(value.to_string())),
                ),
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("invalid log level in FITTRACK_LOG: {0}")]
    InvalidLogLevel(String),
}
