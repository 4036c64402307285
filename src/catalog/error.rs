use std::{io, path::PathBuf};

use thiserror::Error;

use crate::domain::EntryId;

/// Why the catalog could not be loaded. Surfaced once, in place of the list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog: {0}")]
    Malformed(String),

    #[error("duplicate entry id {0}")]
    DuplicateId(EntryId),

    #[error("catalog fetch was interrupted")]
    Interrupted,
}

impl LoadError {
    pub fn malformed(err: anyhow::Error) -> Self {
        LoadError::Malformed(format!("{err:#}"))
    }

    /// Human-readable text for the list area.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
