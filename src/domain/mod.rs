pub mod backend;
pub mod commands;
pub mod console;
pub mod events;
pub mod fs;
pub mod location;
pub mod text_file;

use std::{io, path::PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("is a directory: {}", .path.display())]
    IsADirectory { path: PathBuf },
    #[error("io error on {}: {source}", .path.display())]
    IOError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a local file location: {location}")]
    InvalidLocation { location: String },
    #[error("couldn't deliver notification: {:?}", .0)]
    NotifyError(String),
    #[error("an error happened: {:?}", .0)]
    Error(String),
}

impl Error {
    /// Classifies an io error raised while accessing `path`.
    #[must_use]
    pub fn from_io(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ if path.is_dir() => Self::IsADirectory { path },
            _ => Self::IOError { path, source: err },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::PermissionDenied { .. } => FailureKind::PermissionDenied,
            Self::IsADirectory { .. } => FailureKind::IsADirectory,
            Self::IOError { .. } => FailureKind::Io,
            Self::InvalidLocation { .. } => FailureKind::InvalidLocation,
            Self::NotifyError(_) | Self::Error(_) => FailureKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    PermissionDenied,
    IsADirectory,
    Io,
    InvalidLocation,
    Other,
}

pub type Result<T> = std::result::Result<T, Error>;
