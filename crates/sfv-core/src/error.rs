//! Error types surfaced by the core.
//!
//! Malformed manifest lines are not errors; see `manifest::LineOutcome`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to compute the checksum of one data file.
/// Batch callers drop the file and continue with its siblings.
#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ChecksumError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ChecksumError::Io { path, .. } => path,
        }
    }
}

/// Failure to access a manifest file as a whole.
/// Distinct from an empty manifest, which parses to zero entries.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Open/read/write/rename failed.
    #[error("manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File was read but is not valid UTF-8 text.
    #[error("manifest {} is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },
}
