//! Error type for the books file. Every variant carries the path it was
//! working on so the diagnostic printed on exit names the file, and keeps the
//! underlying I/O or JSON error as its source for the `anyhow` chain.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults that make the data file unusable. None of them are recoverable;
/// they travel up to `main` and end the process.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read books file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("books file {path} is malformed")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize books for {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write books file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
