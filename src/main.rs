use std::io::{self, Read};

use crate::cli::Args;
use clap::Parser;
use cli::Command;
use log::LevelFilter::{Debug, Info};
use memo::{
    console::OsConsole,
    domain::{backend::Backend, commands, text_file::TextFileServiceImpl},
    events,
    fs::OsFileSystem,
};
use simple_logger::SimpleLogger;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { Debug } else { Info };
    SimpleLogger::new().with_level(log_level).init()?;

    let console = OsConsole {};
    let service = TextFileServiceImpl::new(OsFileSystem {});

    match args.command {
        Command::Open { path } => commands::open(&path, &service, &console)?,
        Command::Save { path, content } => {
            let content = match content {
                Some(content) => content,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            commands::save(&path, &content, &service, &console)?;
        }
        Command::Session { json } => {
            let (notifier, receiver) = events::channel();
            let backend = Backend::new(service, notifier);

            let state = commands::session(&backend, &receiver, io::stdin().lock(), &console, json)?;
            log::debug!(
                "session ended with {} bytes in buffer",
                state.buffer.len()
            );
        }
    }

    Ok(())
}
