use thiserror::Error;

/// Errors produced while loading or querying a [`ConfigStore`](super::ConfigStore).
///
/// Section and option mutations never fail; they report no-ops through a
/// `bool` instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Section not found: {0}")]
    NotFound(String),

    #[error("Could not parse line {line_number}: {line}")]
    MalformedLine { line_number: usize, line: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store options: {0}")]
    InvalidOptions(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
