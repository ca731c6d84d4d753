use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("a {width}x{height} world is too large to allocate")]
    TooLarge { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} world")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("cannot access pattern file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Malformed pattern text. Line numbers are 1-based and count the header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing \"<width> <height>\" header")]
    MissingHeader,
    #[error("header is missing the {0}")]
    MissingDimension(&'static str),
    #[error("header {name} {token:?} is not a number")]
    InvalidNumber { name: &'static str, token: String },
    #[error("unexpected {0:?} after the header dimensions")]
    TrailingHeaderToken(String),
    #[error("expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("line {line}: alive cell in column {column} is beyond width {width}")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        width: usize,
    },
    #[error("line {line}: alive cell is beyond height {height}")]
    RowOutOfRange { line: usize, height: usize },
}
