use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error – everything that can stop a comparison before the report is printed
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error(
        "Unable to read file '{}'. Please check if the file exists and you have read permissions.",
        .path.display()
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but is not two-column numeric data.
    #[error("Input file {} must contain exactly two columns: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    /// Reference and obtained datasets hold a different number of points.
    #[error(
        "Reference and obtained data must have the same shape \
         (reference has {reference} points, obtained has {obtained})"
    )]
    ShapeMismatch { reference: usize, obtained: usize },
}

impl Error {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn format(path: &Path, reason: impl Into<String>) -> Self {
        Error::Format {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
