use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use crossbeam_channel::Receiver;
use serde::Serialize;

use crate::domain::{
    backend::Backend,
    console::Console,
    events::{Event, Notifier},
    text_file::TextFileService,
    Error, Result,
};

const HELP: &str = "commands:
  open <path>     load a file into the buffer
  save [<path>]   write the buffer, defaults to the current file
  show            print the buffer
  set <text>      replace the buffer (\\n and \\t are unescaped)
  append <text>   append a line to the buffer
  path            print the current file
  quit            leave the session";

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Open(PathBuf),
    Save(Option<PathBuf>),
    Show,
    Set(String),
    Append(String),
    Path,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim_start())),
            None => (line, None),
        };

        let command = match (name, arg.map(str::trim).filter(|a| !a.is_empty())) {
            ("open", Some(path)) => Self::Open(PathBuf::from(path)),
            ("open", None) => return Err(Error::Error(String::from("usage: open <path>"))),
            ("save", path) => Self::Save(path.map(PathBuf::from)),
            ("show", _) => Self::Show,
            ("set", _) => Self::Set(unescape(arg.unwrap_or_default())),
            ("append", _) => Self::Append(unescape(arg.unwrap_or_default())),
            ("path", _) => Self::Path,
            ("help", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            (other, _) => return Err(Error::Error(format!("unknown command `{other}`"))),
        };

        Ok(Some(command))
    }
}

fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// What the session currently displays.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub buffer: String,
    pub path: Option<PathBuf>,
}

impl SessionState {
    /// Applies a backend event. Failures leave the state untouched.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::FileOpened { path, content, .. } => {
                self.buffer.clone_from(content);
                self.path = Some(path.clone());
            }
            Event::FileSaved { path } => self.path = Some(path.clone()),
            Event::OpenFailed { .. } | Event::SaveFailed { .. } => {}
        }
    }
}

/// Session output that isn't a backend event.
#[derive(Debug, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
enum Reply<'a> {
    Buffer { content: &'a str },
    Path { path: Option<&'a Path> },
    Help { text: &'static str },
    Error { message: String },
}

impl Reply<'_> {
    fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string(self).map_err(|err| Error::Error(err.to_string()));
        }

        Ok(match self {
            Self::Buffer { content } => (*content).to_string(),
            Self::Path { path: Some(path) } => path.display().to_string(),
            Self::Path { path: None } => String::from("(no file)"),
            Self::Help { text } => (*text).to_string(),
            Self::Error { message } => format!("error: {message}"),
        })
    }
}

fn describe(event: &Event) -> String {
    match event {
        Event::FileOpened {
            path,
            content,
            encoding,
        } => {
            let lines = content.lines().count();
            format!(
                "opened {} ({encoding}, {lines} {})",
                path.display(),
                if lines == 1 { "line" } else { "lines" }
            )
        }
        Event::FileSaved { path } => format!("saved {}", path.display()),
        Event::OpenFailed { message, .. } => format!("error: couldn't open: {message}"),
        Event::SaveFailed { message, .. } => format!("error: couldn't save: {message}"),
    }
}

/// Runs the interactive loop until `quit` or the end of `input`.
///
/// Requests go through `backend`; the resulting events are drained from
/// `events` after every command and folded into the session state. With
/// `json` every output line is a single JSON object: events carry an
/// `event` tag, everything else a `reply` tag.
pub fn session<S, N, C, R>(
    backend: &Backend<S, N>,
    events: &Receiver<Event>,
    input: R,
    console: &C,
    json: bool,
) -> Result<SessionState>
where
    S: TextFileService,
    N: Notifier,
    C: Console,
    R: BufRead,
{
    let mut state = SessionState::default();

    for (number, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                log::warn!("skipping input line {}: {err}", number + 1);
                continue;
            }
            Err(err) => return Err(Error::Error(err.to_string())),
        };

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                reply(
                    console,
                    json,
                    &Reply::Error {
                        message: message_of(&err),
                    },
                )?;
                continue;
            }
        };

        log::debug!("session command: {command:?}");

        match command {
            SessionCommand::Open(path) => backend.open_file(&path),
            SessionCommand::Save(path) => match path.as_deref().or(state.path.as_deref()) {
                Some(path) => backend.save_file(path, &state.buffer),
                None => reply(
                    console,
                    json,
                    &Reply::Error {
                        message: String::from("no file to save to, use `save <path>`"),
                    },
                )?,
            },
            SessionCommand::Show => reply(
                console,
                json,
                &Reply::Buffer {
                    content: &state.buffer,
                },
            )?,
            SessionCommand::Set(text) => state.buffer = text,
            SessionCommand::Append(text) => {
                if !state.buffer.is_empty() && !state.buffer.ends_with('\n') {
                    state.buffer.push('\n');
                }
                state.buffer.push_str(&text);
            }
            SessionCommand::Path => reply(
                console,
                json,
                &Reply::Path {
                    path: state.path.as_deref(),
                },
            )?,
            SessionCommand::Help => reply(console, json, &Reply::Help { text: HELP })?,
            SessionCommand::Quit => break,
        }

        for event in events.try_iter() {
            state.apply(&event);
            if json {
                console.println(event.to_json()?)?;
            } else {
                console.println(describe(&event))?;
            }
        }
    }

    Ok(state)
}

fn reply<C: Console>(console: &C, json: bool, reply: &Reply) -> Result<()> {
    console.println(reply.render(json)?)
}

fn message_of(err: &Error) -> String {
    match err {
        Error::Error(message) => message.clone(),
        other => other.to_string(),
    }
}
