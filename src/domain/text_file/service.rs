use std::path::Path;

use crate::domain::{fs::FileSystem, Result};

use super::{decode, encode, OpenedFile, SavedFile, TextFileService};

#[allow(clippy::module_name_repetitions)]
pub struct TextFileServiceImpl<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> TextFileServiceImpl<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }
}

impl<FS: FileSystem> TextFileService for TextFileServiceImpl<FS> {
    fn open(&self, path: &Path) -> Result<OpenedFile> {
        let bytes = self.fs.read(path)?;
        let (encoding, content) = decode(&bytes);

        log::debug!(
            "read {} bytes from {} as {}",
            bytes.len(),
            path.display(),
            encoding.name()
        );

        Ok(OpenedFile {
            path: path.to_path_buf(),
            content,
            encoding,
        })
    }

    fn save(&self, path: &Path, content: &str) -> Result<SavedFile> {
        let bytes = encode(content);
        self.fs.write(path, &bytes)?;

        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());

        Ok(SavedFile {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use encoding_rs::{UTF_16LE, UTF_8};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::domain::{
        fs::MockFileSystem,
        text_file::{OpenedFile, SavedFile, TextFileService, TextFileServiceImpl},
        Error, FailureKind,
    };

    #[test]
    fn open_returns_path_and_decoded_content() {
        let mut fs = MockFileSystem::new();
        fs.expect_read()
            .withf(|path| path.ends_with("notes.txt"))
            .times(1)
            .returning(|_| Ok(b"hello\nworld".to_vec()));

        let service = TextFileServiceImpl::new(fs);

        assert_eq!(
            service.open(Path::new("notes.txt")).unwrap(),
            OpenedFile {
                path: PathBuf::from("notes.txt"),
                content: String::from("hello\nworld"),
                encoding: UTF_8,
            }
        );
    }

    #[test]
    fn open_strips_byte_order_mark() {
        let mut fs = MockFileSystem::new();
        fs.expect_read()
            .returning(|_| Ok(vec![0xFF, 0xFE, b'h', 0, b'i', 0]));

        let service = TextFileServiceImpl::new(fs);
        let opened = service.open(Path::new("utf16.txt")).unwrap();

        assert_eq!(opened.encoding, UTF_16LE);
        assert_eq!(opened.content, "hi");
    }

    #[rstest]
    #[case::not_found(FailureKind::NotFound)]
    #[case::permission_denied(FailureKind::PermissionDenied)]
    #[case::directory(FailureKind::IsADirectory)]
    fn open_propagates_read_failure(#[case] kind: FailureKind) {
        let mut fs = MockFileSystem::new();
        fs.expect_read().returning(move |path| {
            let path = path.to_path_buf();
            Err(match kind {
                FailureKind::NotFound => Error::NotFound { path },
                FailureKind::PermissionDenied => Error::PermissionDenied { path },
                _ => Error::IsADirectory { path },
            })
        });

        let service = TextFileServiceImpl::new(fs);
        let err = service.open(Path::new("missing.txt")).unwrap_err();

        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn save_writes_utf8_bytes() {
        let mut fs = MockFileSystem::new();
        fs.expect_write()
            .withf(|path, contents| path.ends_with("notes.txt") && contents.to_vec() == "bye ✓".as_bytes().to_vec())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TextFileServiceImpl::new(fs);

        assert_eq!(
            service.save(Path::new("notes.txt"), "bye ✓").unwrap(),
            SavedFile {
                path: PathBuf::from("notes.txt"),
            }
        );
    }

    #[test]
    fn save_propagates_write_failure() {
        let mut fs = MockFileSystem::new();
        fs.expect_write().returning(|path, _| {
            Err(Error::NotFound {
                path: path.to_path_buf(),
            })
        });

        let service = TextFileServiceImpl::new(fs);
        let err = service
            .save(Path::new("missing/dir/notes.txt"), "anything")
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::NotFound);
        assert_eq!(err.to_string(), "file not found: missing/dir/notes.txt");
    }
}
