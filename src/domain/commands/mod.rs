mod open;
mod save;
mod session;

pub use open::open;
pub use save::save;
pub use session::{session, SessionCommand, SessionState};
