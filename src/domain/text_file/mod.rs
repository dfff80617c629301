use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use mockall::automock;

use crate::domain::Result;

mod encoding;
mod service;

pub use encoding::{decode, encode};
#[allow(clippy::module_name_repetitions)]
pub use service::TextFileServiceImpl;

/// A file read into memory and decoded to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub content: String,
    pub encoding: &'static Encoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
}

/// Loads and stores whole text buffers. Implementations hold no state
/// between calls.
#[automock]
pub trait TextFileService {
    fn open(&self, path: &Path) -> Result<OpenedFile>;

    /// Replaces the file's content with `content` encoded as UTF-8.
    fn save(&self, path: &Path, content: &str) -> Result<SavedFile>;
}
