use crate::options::OptionKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for config-options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Config file {} does not exist.", .0.display())]
    FileMissing(PathBuf),

    #[error("Config file {} does not exist, created a blank one.", .0.display())]
    Created(PathBuf),

    #[error("Config file {} does not exist, but failed to create a blank one: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read configuration file {}. Ensure that it can be read.", .0.display())]
    Unreadable(PathBuf),

    #[error("Could not write to configuration file {}. Ensure that it can be written to.", .0.display())]
    Unwritable(PathBuf),

    #[error("Error reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to configuration file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading JSON from file {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to serialize config options: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Error parsing config option \"{0}\": Option not found or is blank.")]
    OptionMissing(String),

    #[error("Error parsing config option \"{key}\": Option is of the wrong type (expected {expected}, received {received}).")]
    WrongType {
        key: String,
        expected: OptionKind,
        received: OptionKind,
    },

    #[error("Error parsing config option: Option not found or is blank. Added option to the file ({}).", .keys.join(", "))]
    OptionsAdded { keys: Vec<String> },
}

impl OptionsError {
    /// True when the file on disk was changed and reading it again will succeed.
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::Created(_) | Self::OptionsAdded { .. })
    }
}

pub type Result<T> = std::result::Result<T, OptionsError>;
