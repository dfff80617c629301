use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{self, FailureKind};

/// Outcome of a backend call, pushed to whoever presents the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    FileOpened {
        path: PathBuf,
        content: String,
        encoding: String,
    },
    FileSaved {
        path: PathBuf,
    },
    OpenFailed {
        path: PathBuf,
        kind: FailureKind,
        message: String,
    },
    SaveFailed {
        path: PathBuf,
        kind: FailureKind,
        message: String,
    },
}

impl Event {
    #[must_use]
    pub fn open_failed(path: PathBuf, err: &domain::Error) -> Self {
        Self::OpenFailed {
            path,
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn save_failed(path: PathBuf, err: &domain::Error) -> Self {
        Self::SaveFailed {
            path,
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    pub fn to_json(&self) -> domain::Result<String> {
        serde_json::to_string(self).map_err(|err| domain::Error::Error(err.to_string()))
    }
}

pub trait Notifier {
    fn notify(&self, event: Event) -> domain::Result<()>;
}
