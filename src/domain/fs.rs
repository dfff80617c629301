use std::path::Path;

use mockall::automock;

use crate::domain::Result;

#[automock]
pub trait FileSystem {
    /// Reads the whole file into memory.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Creates or truncates the file and writes `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}
