use std::path::Path;

use crate::domain::{
    console::Console, location::to_local_path, text_file::TextFileService, Result,
};

pub fn save<S: TextFileService, C: Console>(
    location: &Path,
    content: &str,
    service: &S,
    console: &C,
) -> Result<()> {
    let saved = service.save(&to_local_path(location)?, content)?;

    console.println(format!("saved {}", saved.path.display()))?;

    Ok(())
}
