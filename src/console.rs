use std::io::{self, Write};

use crate::domain;

#[allow(clippy::module_name_repetitions)]
pub struct OsConsole {}

impl domain::console::Console for OsConsole {
    fn print<S: AsRef<str>>(&self, s: S) -> domain::Result<()> {
        let mut stdout = io::stdout().lock();
        let into_domain = |err: io::Error| domain::Error::Error(err.to_string());

        stdout.write_all(s.as_ref().as_bytes()).map_err(into_domain)?;
        stdout.flush().map_err(into_domain)?;

        Ok(())
    }
}
