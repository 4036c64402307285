use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::{
    domain::Entry,
    io::{DocumentFormat, parse_catalog_str},
};

use super::LoadError;

/// Where the catalog comes from. Fetched exactly once per session.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Entry>, LoadError>> + Send;
}

/// Catalog document on disk; the format follows the file extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Entry>, LoadError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            format = %self.format,
            bytes = contents.len(),
            "catalog document read"
        );
        parse_catalog_str(&contents, self.format).map_err(LoadError::malformed)
    }
}

/// Entries already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: Vec<Entry>,
}

impl StaticSource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Entry>, LoadError> {
        Ok(self.entries.clone())
    }
}
