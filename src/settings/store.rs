use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::io::{DocumentFormat, parse_settings_str, render_settings_string};

use super::SettingsError;

/// Opaque string-keyed persistence used for display preferences.
pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Settings that live only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: IndexMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings persisted as a flat document; the whole file is rewritten on each set.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    format: DocumentFormat,
    values: IndexMap<String, String>,
}

impl FileSettings {
    /// Open `path`, starting empty when it is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = DocumentFormat::from_path(&path);
        let values = match fs::read_to_string(&path) {
            Ok(contents) => parse_settings_str(&contents, format).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), "ignoring malformed settings: {err:#}");
                IndexMap::new()
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => IndexMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), "cannot read settings: {err}");
                IndexMap::new()
            }
        };
        Self {
            path,
            format,
            values,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), SettingsError> {
        let payload = render_settings_string(&self.values, self.format)
            .map_err(|err| SettingsError::Serialize(format!("{err:#}")))?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, payload).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
