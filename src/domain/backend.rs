use std::path::Path;

use crate::domain::{
    events::{Event, Notifier},
    location::to_local_path,
    text_file::TextFileService,
};

/// Bridges presentation-level requests to the text file service.
///
/// Every call produces exactly one [`Event`]: the success notification or
/// the matching failure. Nothing is returned to the caller; the presentation
/// layer reacts to the events alone. Locations may be plain paths or
/// `file://` URLs as produced by file pickers.
pub struct Backend<S: TextFileService, N: Notifier> {
    service: S,
    notifier: N,
}

impl<S: TextFileService, N: Notifier> Backend<S, N> {
    pub fn new(service: S, notifier: N) -> Self {
        Self { service, notifier }
    }

    pub fn open_file(&self, location: &Path) {
        let event = match to_local_path(location).and_then(|path| self.service.open(&path)) {
            Ok(opened) => Event::FileOpened {
                path: opened.path,
                content: opened.content,
                encoding: opened.encoding.name().to_string(),
            },
            Err(err) => {
                log::warn!("couldn't open file {}: {err}", location.display());
                Event::open_failed(location.to_path_buf(), &err)
            }
        };

        self.emit(event);
    }

    pub fn save_file(&self, location: &Path, content: &str) {
        let event = match to_local_path(location).and_then(|path| self.service.save(&path, content))
        {
            Ok(saved) => Event::FileSaved { path: saved.path },
            Err(err) => {
                log::warn!("couldn't save file {}: {err}", location.display());
                Event::save_failed(location.to_path_buf(), &err)
            }
        };

        self.emit(event);
    }

    fn emit(&self, event: Event) {
        if let Err(err) = self.notifier.notify(event) {
            log::warn!("{err}");
        }
    }
}
