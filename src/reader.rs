use crate::access::{self, Access};
use crate::error::{OptionsError, Result};
use crate::options::{is_blank, Indent, OptionKind, Options};
use crate::settings::{ReadSettings, DEFAULT_CONFIG_PATH};
use crate::writer::OptionsWriter;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads a JSON config file and validates it against a defaults mapping
pub struct OptionsReader {
    path: PathBuf,
    defaults: Options,
    settings: ReadSettings,
}

impl OptionsReader {
    /// Create a reader with default settings
    ///
    /// # Arguments
    /// * `path` - Config file location
    /// * `defaults` - Recognized option keys, their default values and expected kinds
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, defaults: Options) -> Self {
        Self::from_settings(path, defaults, ReadSettings::default())
    }

    /// Create a reader for [`DEFAULT_CONFIG_PATH`] with default settings
    #[must_use]
    pub fn at_default_path(defaults: Options) -> Self {
        Self::new(DEFAULT_CONFIG_PATH, defaults)
    }

    #[must_use]
    pub fn from_settings(path: impl Into<PathBuf>, defaults: Options, settings: ReadSettings) -> Self {
        Self {
            path: path.into(),
            defaults,
            settings,
        }
    }

    #[must_use]
    pub fn accept_empty(mut self, accept_empty: bool) -> Self {
        self.settings.accept_empty = accept_empty;
        self
    }

    #[must_use]
    pub fn create(mut self, create: bool) -> Self {
        self.settings.create = create;
        self
    }

    #[must_use]
    pub fn add_not_exist(mut self, add_not_exist: bool) -> Self {
        self.settings.add_not_exist = add_not_exist;
        self
    }

    #[must_use]
    pub fn fail_on_create(mut self, fail_on_create: bool) -> Self {
        self.settings.fail_on_create = fail_on_create;
        self
    }

    #[must_use]
    pub fn fail_on_patch(mut self, fail_on_patch: bool) -> Self {
        self.settings.fail_on_patch = fail_on_patch;
        self
    }

    /// Set indentation used when creating or patching the file
    #[must_use]
    pub fn indent(mut self, indent: impl Into<Indent>) -> Self {
        self.settings.indent = indent.into();
        self
    }

    /// Config file this reader loads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn settings(&self) -> &ReadSettings {
        &self.settings
    }

    /// Read the config file and resolve every default key against it.
    ///
    /// The file is re-read from disk on every call.
    pub async fn read(&self) -> Result<Options> {
        if !access::exists(&self.path).await {
            return self.handle_missing_file().await;
        }

        let file_options = self.load().await?;
        let resolved = self.resolve(&file_options)?;

        if resolved.patched.is_empty() {
            return Ok(resolved.options);
        }

        tracing::info!(
            "Adding missing options to {:?}: {}",
            self.path,
            resolved.patched.join(", ")
        );
        self.writer().write(&resolved.options).await?;

        if self.settings.fail_on_patch {
            Err(OptionsError::OptionsAdded {
                keys: resolved.patched,
            })
        } else {
            Ok(resolved.options)
        }
    }

    async fn handle_missing_file(&self) -> Result<Options> {
        if !self.settings.create {
            return Err(OptionsError::FileMissing(self.path.clone()));
        }

        let data = self.settings.indent.to_json(&self.defaults)?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(|source| OptionsError::CreateFailed {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Created config file {:?} from defaults", self.path);

        if self.settings.fail_on_create {
            Err(OptionsError::Created(self.path.clone()))
        } else {
            Ok(self.defaults.clone())
        }
    }

    async fn load(&self) -> Result<Options> {
        access::check_access(&self.path, Access::Read)
            .await
            .map_err(|_| OptionsError::Unreadable(self.path.clone()))?;

        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| OptionsError::Read {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Read {} bytes from {:?}", content.len(), self.path);

        match serde_json::from_slice::<Value>(&content) {
            Ok(Value::Object(options)) => Ok(options),
            Ok(other) => Err(OptionsError::Parse {
                path: self.path.clone(),
                reason: format!(
                    "expected an object at the top level, found {}",
                    OptionKind::of(Some(&other))
                ),
            }),
            Err(e) => Err(OptionsError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Validate `file_options` key by key, stopping at the first rejected option
    fn resolve(&self, file_options: &Options) -> Result<Resolved> {
        let mut options = Options::new();
        let mut patched = Vec::new();

        for (key, default) in &self.defaults {
            let read_option = file_options.get(key);

            if !self.settings.accept_empty && is_blank(read_option) {
                if !self.settings.add_not_exist {
                    tracing::warn!("Option {key:?} not found or blank in {:?}", self.path);
                    return Err(OptionsError::OptionMissing(key.clone()));
                }

                tracing::debug!("Option {key:?} not found or blank, using default");
                options.insert(key.clone(), default.clone());
                patched.push(key.clone());
                continue;
            }

            let expected = OptionKind::of(Some(default));
            let received = OptionKind::of(read_option);
            if expected != received {
                tracing::warn!(
                    "Option {key:?} in {:?} has wrong type: expected {expected}, received {received}",
                    self.path
                );
                return Err(OptionsError::WrongType {
                    key: key.clone(),
                    expected,
                    received,
                });
            }

            if let Some(value) = read_option {
                options.insert(key.clone(), value.clone());
            }
        }

        Ok(Resolved { options, patched })
    }

    fn writer(&self) -> OptionsWriter {
        OptionsWriter::new(self.path.clone()).with_indent(self.settings.indent.clone())
    }
}

#[derive(Debug)]
struct Resolved {
    options: Options,
    patched: Vec<String>,
}

/// Read `path` against `defaults` with default settings.
///
/// See [`OptionsReader`] for the individual switches.
pub async fn read_options(path: impl AsRef<Path>, defaults: Options) -> Result<Options> {
    OptionsReader::new(path.as_ref(), defaults).read().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reader_for(file: &str) -> (OptionsReader, Options) {
        let mut defaults = Options::new();
        defaults.insert("name".to_string(), json!("app"));
        defaults.insert("port".to_string(), json!(8080));
        defaults.insert("verbose".to_string(), json!(false));

        let file_options: Value = serde_json::from_str(file).unwrap();
        let file_options = match file_options {
            Value::Object(map) => map,
            _ => panic!("test file must be an object"),
        };

        (OptionsReader::new("Config.json", defaults), file_options)
    }

    #[test]
    fn test_resolve_takes_file_values() {
        let (reader, file) = reader_for(r#"{"name": "svc", "port": 9000, "verbose": true, "extra": 1}"#);

        let resolved = reader.resolve(&file).unwrap();

        assert!(resolved.patched.is_empty());
        assert_eq!(resolved.options.len(), 3);
        assert_eq!(resolved.options["name"], json!("svc"));
        assert_eq!(resolved.options["port"], json!(9000));
        assert!(!resolved.options.contains_key("extra"));
    }

    #[test]
    fn test_resolve_missing_key_with_accept_empty_is_wrong_type() {
        let (reader, file) = reader_for(r#"{"name": "svc", "port": 9000}"#);

        let err = reader.resolve(&file).unwrap_err();

        match err {
            OptionsError::WrongType {
                key,
                expected,
                received,
            } => {
                assert_eq!(key, "verbose");
                assert_eq!(expected, OptionKind::Boolean);
                assert_eq!(received, OptionKind::Missing);
            }
            other => panic!("Expected WrongType, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_accepts_empty_string_for_string_option() {
        let (reader, file) = reader_for(r#"{"name": "", "port": 1, "verbose": false}"#);

        let resolved = reader.resolve(&file).unwrap();
        assert_eq!(resolved.options["name"], json!(""));
    }

    #[test]
    fn test_resolve_patches_blank_values() {
        let (reader, file) = reader_for(r#"{"name": "", "port": null, "verbose": true}"#);
        let reader = reader.accept_empty(false);

        let resolved = reader.resolve(&file).unwrap();

        assert_eq!(resolved.patched, vec!["name", "port"]);
        assert_eq!(resolved.options["name"], json!("app"));
        assert_eq!(resolved.options["port"], json!(8080));
        assert_eq!(resolved.options["verbose"], json!(true));
    }

    #[test]
    fn test_resolve_stops_at_first_blank_without_patching() {
        let (reader, file) = reader_for(r#"{"port": 1}"#);
        let reader = reader.accept_empty(false).add_not_exist(false);

        let err = reader.resolve(&file).unwrap_err();
        assert!(matches!(err, OptionsError::OptionMissing(ref key) if key == "name"));
    }

    #[test]
    fn test_resolve_stops_at_first_wrong_type() {
        let (reader, file) = reader_for(r#"{"name": 5, "port": "x", "verbose": false}"#);

        let err = reader.resolve(&file).unwrap_err();
        assert!(matches!(err, OptionsError::WrongType { ref key, .. } if key == "name"));
    }

    #[test]
    fn test_default_path() {
        let reader = OptionsReader::at_default_path(Options::new());
        assert_eq!(reader.path(), Path::new(DEFAULT_CONFIG_PATH));
        assert_eq!(reader.settings(), &ReadSettings::default());
    }

    #[test]
    fn test_builder_switches() {
        let reader = OptionsReader::new("Config.json", Options::new())
            .accept_empty(false)
            .create(false)
            .add_not_exist(false)
            .fail_on_create(false)
            .fail_on_patch(false)
            .indent(4_usize);

        let settings = reader.settings();
        assert!(!settings.accept_empty);
        assert!(!settings.create);
        assert!(!settings.add_not_exist);
        assert!(!settings.fail_on_create);
        assert!(!settings.fail_on_patch);
        assert_eq!(settings.indent, Indent::Spaces(4));
    }
}
