use crate::access;
use crate::error::{OptionsError, Result};
use crate::options::{Indent, Options};
use crate::settings::DEFAULT_CONFIG_PATH;
use std::path::{Path, PathBuf};

/// Confirmation returned by a successful write
pub const WRITE_CONFIRMATION: &str = "Successfully wrote config options.";

/// Writes option mappings to a JSON config file
pub struct OptionsWriter {
    path: PathBuf,
    indent: Indent,
}

impl OptionsWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: Indent::None,
        }
    }

    /// Create a writer for [`DEFAULT_CONFIG_PATH`]
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }

    /// Set indentation for the written JSON
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<Indent>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Config file this writer replaces
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `options` and replace the file contents with it
    pub async fn write(&self, options: &Options) -> Result<String> {
        let data = self.indent.to_json(options)?;

        access::check_writable(&self.path)
            .await
            .map_err(|_| OptionsError::Unwritable(self.path.clone()))?;

        tokio::fs::write(&self.path, data)
            .await
            .map_err(|source| OptionsError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Wrote {} options to {:?}", options.len(), self.path);

        Ok(WRITE_CONFIRMATION.to_string())
    }
}

/// Write `options` to `path` as JSON.
///
/// # Errors
/// `Unwritable` if the file (or, for a new file, its directory) cannot be
/// written, `Write` if the write itself fails.
pub async fn write_options(
    path: impl AsRef<Path>,
    options: &Options,
    indent: impl Into<Indent>,
) -> Result<String> {
    OptionsWriter::new(path.as_ref())
        .with_indent(indent)
        .write(options)
        .await
}
