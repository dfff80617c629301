use std::path::Path;

use crate::domain::{
    console::Console, location::to_local_path, text_file::TextFileService, Result,
};

/// Writes the decoded content unchanged, without a trailing newline.
pub fn open<S: TextFileService, C: Console>(
    location: &Path,
    service: &S,
    console: &C,
) -> Result<()> {
    let opened = service.open(&to_local_path(location)?)?;

    log::info!(
        "opened {} ({})",
        opened.path.display(),
        opened.encoding.name()
    );

    console.print(&opened.content)?;

    Ok(())
}
