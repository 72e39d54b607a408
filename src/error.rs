use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

/// Broad category of a parse failure, used when reporting why a file was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Header,
    Format,
}

/// Failure while reading the decompressed ACMI text of a single recording.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    #[error("author not found")]
    MissingAuthor,

    #[error("author ({author}) cannot be matched: {source}")]
    InvalidAuthor {
        author: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed timestamp on line {line}: '{value}'")]
    MalformedTimestamp { line: usize, value: String },

    #[error("malformed position on line {line}: '{value}'")]
    MalformedPosition { line: usize, value: String },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::MissingAuthor | Self::InvalidAuthor { .. } => ErrorKind::Header,
            Self::MalformedTimestamp { .. } | Self::MalformedPosition { .. } => ErrorKind::Format,
        }
    }
}

/// Failure attached to one recording file. The message names the file.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("failed '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed '{}': {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    #[error("failed '{}': archive has no entries", .path.display())]
    EmptyArchive { path: PathBuf },

    #[error("failed '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("failed to read directory '{}': {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { source, .. } => source.kind(),
            _ => ErrorKind::Io,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no reader at index {0}")]
    UnknownReader(usize),

    #[error("reader '{0}' is already analysing files")]
    AlreadyRunning(&'static str),

    #[error("failed to start analysis thread: {0}")]
    Spawn(#[source] io::Error),

    #[error(transparent)]
    Reader(#[from] ReaderError),
}
