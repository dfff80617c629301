use std::{
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::Path,
};

use crate::domain::{self, fs::FileSystem};

pub struct OsFileSystem {}

impl FileSystem for OsFileSystem {
    fn read(&self, path: &Path) -> domain::Result<Vec<u8>> {
        let into_domain = |err| domain::Error::from_io(path.to_path_buf(), err);

        let mut file = File::open(path).map_err(into_domain)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(into_domain)?;

        Ok(bytes)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> domain::Result<()> {
        let into_domain = |err| domain::Error::from_io(path.to_path_buf(), err);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(into_domain)?;
        file.write_all(contents).map_err(into_domain)?;
        file.flush().map_err(into_domain)?;

        Ok(())
    }
}
