use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "memo", about = "Open and save plain text files")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
    #[clap(short, long, action, global = true)]
    pub debug: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the decoded content of a file
    Open {
        /// File path or file:// URL
        path: PathBuf,
    },
    /// Writes text to a file as UTF-8, replacing its content
    Save {
        /// File path or file:// URL
        path: PathBuf,
        /// Text to write, read from stdin when omitted
        #[clap(short, long)]
        content: Option<String>,
    },
    /// Starts an interactive editing session driven by stdin
    Session {
        /// Reports events as JSON lines
        #[clap(long, action)]
        json: bool,
    },
}
