//! Error types for the proofing engine.
//!
//! File I/O failures are per-page: batch operations record them in a
//! [`BatchReport`](crate::document::BatchReport) and move on to the next
//! page. Decision ambiguities (hyphen ties, unknown toggle names) are not
//! errors and never surface here.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CleanError>;

#[derive(Debug, Error)]
pub enum CleanError {
    /// A referenced page file does not exist at load or save time.
    #[error("file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Any other I/O failure while reading or writing a page file.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file's bytes are not valid UTF-8 text. Reported distinctly from
    /// [`CleanError::InputNotFound`] so the caller knows whether to retry
    /// with a different path or a different encoding.
    #[error("{} is not valid UTF-8 text", .path.display())]
    Encoding { path: PathBuf },

    /// An explicitly scoped page index outside the document.
    #[error("page index {index} out of range ({len} pages)")]
    PageOutOfRange { index: usize, len: usize },
}
