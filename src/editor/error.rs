use std::io;
use std::path::PathBuf;

/// Errors raised by document file I/O.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("document has no filename")]
    NoFilename,
}
