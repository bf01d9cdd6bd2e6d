//! consistently formatted .fasta files from questionably formatted ones
//!
//! Error taxonomy of the reformatting pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error(
        "Could not find any files with an extension starting with \"fa\" in {}. \
         Please check to ensure that your sequence path is correct",
        .path.display()
    )]
    NoInputFiles { path: PathBuf },

    #[error("Malformed identifier {id:?}: {reason}")]
    MalformedIdentifier { id: String, reason: String },

    #[error("Cannot prepare directory {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Split output {name} from {} was already written from {}",
        .second.display(),
        .first.display()
    )]
    SplitCollision {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Line width must be at least 1")]
    InvalidWidth,
}

impl FormatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FormatError::Io {
            path: path.into(),
            source,
        }
    }
}
