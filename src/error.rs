use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal problems reading a map; the game cannot start without one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read map file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map file '{}' has no cells", .path.display())]
    Empty { path: PathBuf },

    #[error("map file '{}' has no start marker 'S'", .path.display())]
    MissingStart { path: PathBuf },
}

impl LoadError {
    pub fn from_parse(err: ParseError, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err {
            ParseError::Empty => LoadError::Empty { path },
            ParseError::MissingStart => LoadError::MissingStart { path },
        }
    }
}

/// Fatal problems in map text, before a file name is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("map has no cells")]
    Empty,

    #[error("map has no start marker 'S'")]
    MissingStart,
}

/// A cell the loader could not fill. Logged and left at the void symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed cell at row {row}, column {col}: {reason}")]
pub struct MalformedCell {
    pub row: usize,
    pub col: usize,
    pub reason: MalformedReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("line too short")]
    ShortLine,
    #[error("duplicate start marker")]
    DuplicateStart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("cell ({row}, {col}) is outside the map")]
    OutOfBounds { row: i64, col: i64 },

    #[error("unknown direction '{0}'")]
    InvalidDirection(String),
}
