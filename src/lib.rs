pub mod console;
pub mod domain;
pub mod events;
pub mod fs;
