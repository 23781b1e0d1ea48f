use std::fmt;
use std::io;

use super::config::ConfigError;

/// Errors that end a harness run.
#[derive(Debug)]
pub enum HarnessError {
    Io(io::Error),
    Config(ConfigError),
    /// The user typed something that cannot be used; the message is shown as is.
    InvalidInput(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Io(e) => write!(f, "I/O error: {}", e),
            HarnessError::Config(e) => write!(f, "configuration error: {}", e),
            HarnessError::InvalidInput(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::Io(e) => Some(e),
            HarnessError::Config(e) => Some(e),
            HarnessError::InvalidInput(_) => None,
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        HarnessError::Io(e)
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self {
        HarnessError::Config(e)
    }
}
