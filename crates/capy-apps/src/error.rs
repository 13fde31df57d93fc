//! Error types for capy-apps

use std::path::PathBuf;

/// Failure to read a single desktop entry.
///
/// These never leave the resolver: the offending file is skipped.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    Decode { path: PathBuf },
}
