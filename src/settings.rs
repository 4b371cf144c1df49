use crate::options::Indent;
use serde::{Deserialize, Serialize};

/// Conventional config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "./Config.json";

/// Behaviour switches for reading a config file
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReadSettings {
    /// Accept a missing, `null` or empty-string value for an option
    #[serde(default = "default_true")]
    pub accept_empty: bool,
    /// Create the file from the defaults when it does not exist
    #[serde(default = "default_true")]
    pub create: bool,
    /// Patch missing or blank options with their defaults and persist them
    #[serde(default = "default_true")]
    pub add_not_exist: bool,
    /// Report a freshly created file as an error instead of returning the defaults
    #[serde(default = "default_true")]
    pub fail_on_create: bool,
    /// Report a patched file as an error instead of returning the patched options
    #[serde(default = "default_true")]
    pub fail_on_patch: bool,
    /// Indentation for files written while creating or patching
    #[serde(default)]
    pub indent: Indent,
}

fn default_true() -> bool {
    true
}

impl Default for ReadSettings {
    fn default() -> Self {
        Self {
            accept_empty: default_true(),
            create: default_true(),
            add_not_exist: default_true(),
            fail_on_create: default_true(),
            fail_on_patch: default_true(),
            indent: Indent::default(),
        }
    }
}
