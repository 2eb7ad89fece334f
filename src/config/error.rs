use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The concurrency was not an integer of at least one.
    InvalidConcurrency(String),
    /// The UTC offset was not of the form `+HH:MM`.
    InvalidOffset(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidConcurrency(value) => {
                write!(f, "concurrency must be an integer of at least 1, given: {value:?}")
            }
            ConfigError::InvalidOffset(value) => {
                write!(f, "UTC offset must look like +HH:MM, given: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
