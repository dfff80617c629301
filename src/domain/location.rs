use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::{Error, Result};

const FILE_SCHEME: &str = "file://";

/// Turns a location handed over by a file picker into a local path.
///
/// `file://` URLs are percent-decoded into the path they name. Anything else
/// is already a path and is returned untouched.
pub fn to_local_path(location: &Path) -> Result<PathBuf> {
    let Some(url) = location.to_str().filter(|l| is_file_url(l)) else {
        return Ok(location.to_path_buf());
    };

    let invalid = || Error::InvalidLocation {
        location: url.to_string(),
    };

    Url::parse(url)
        .map_err(|_| invalid())?
        .to_file_path()
        .map_err(|()| invalid())
}

fn is_file_url(location: &str) -> bool {
    location
        .get(..FILE_SCHEME.len())
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(FILE_SCHEME))
}
