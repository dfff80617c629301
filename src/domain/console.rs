use crate::domain;

pub trait Console {
    /// Writes `s` exactly as given.
    fn print<S: AsRef<str>>(&self, s: S) -> domain::Result<()>;

    fn println<S: AsRef<str>>(&self, s: S) -> domain::Result<()> {
        self.print(format!("{}\n", s.as_ref()))
    }
}
