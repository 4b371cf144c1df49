//! Read, validate and write flat JSON configuration files.
//!
//! A caller supplies a defaults mapping whose values double as the expected
//! type of each option. [`read_options`] checks the file against it, creating
//! or patching the file where allowed, and [`write_options`] persists a
//! mapping back to disk.
//!
//! # Example
//!
//! ```no_run
//! use config_options::{read_options, Options, DEFAULT_CONFIG_PATH};
//! use serde_json::json;
//!
//! # async fn run() -> config_options::Result<()> {
//! let mut defaults = Options::new();
//! defaults.insert("host".to_string(), json!("localhost"));
//! defaults.insert("port".to_string(), json!(8080));
//!
//! let options = read_options(DEFAULT_CONFIG_PATH, defaults).await?;
//! println!("Port: {}", options["port"]);
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod error;
pub mod options;
pub mod reader;
pub mod settings;
pub mod writer;

pub use error::{OptionsError, Result};
pub use options::{Indent, OptionKind, Options};
pub use reader::{read_options, OptionsReader};
pub use settings::{ReadSettings, DEFAULT_CONFIG_PATH};
pub use writer::{write_options, OptionsWriter, WRITE_CONFIRMATION};
