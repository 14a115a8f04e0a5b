//! Command line dispatch.
//!
//! A command line is split on whitespace; the first token names an operation
//! and the rest are its positional arguments. There is no quoting, so
//! arguments (file contents included) cannot contain spaces.
//!
//! ```text
//! mkdir folder
//! cd folder
//! createFile text.txt TEXT
//! cat text.txt
//! mv text.txt /
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{DispatchError, FsError};
use crate::namespace::Namespace;

/// Every command name, in the order shown to users.
const COMMANDS: &[(&str, usize)] = &[
    ("cd", 1),
    ("mkdir", 1),
    ("createFile", 2),
    ("ls", 0),
    ("cat", 1),
    ("mv", 2),
    ("cp", 2),
    ("pwdPath", 0),
    ("rm", 1),
];

/// Names accepted by [`Command::parse`].
pub fn available_commands() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|&(name, _)| name)
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Cd(String),
    Mkdir(String),
    CreateFile { path: String, contents: String },
    Ls,
    Cat(String),
    Mv { from: String, to: String },
    Cp { from: String, to: String },
    PwdPath,
    Rm(String),
}

impl Command {
    /// Parse a command line. Names are case-sensitive and the argument count
    /// must match exactly.
    pub fn parse(line: &str) -> Result<Self, DispatchError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(DispatchError::UnknownCommand)?;
        let &(name, arity) = COMMANDS
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or(DispatchError::UnknownCommand)?;

        let mut args: Vec<String> = tokens.map(str::to_string).collect();
        if args.len() != arity {
            return Err(DispatchError::Arity { name, arity });
        }

        let mut next = || args.remove(0);
        Ok(match name {
            "cd" => Self::Cd(next()),
            "mkdir" => Self::Mkdir(next()),
            "createFile" => Self::CreateFile {
                path: next(),
                contents: next(),
            },
            "ls" => Self::Ls,
            "cat" => Self::Cat(next()),
            "mv" => Self::Mv {
                from: next(),
                to: next(),
            },
            "cp" => Self::Cp {
                from: next(),
                to: next(),
            },
            "pwdPath" => Self::PwdPath,
            "rm" => Self::Rm(next()),
            _ => return Err(DispatchError::UnknownCommand),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cd(_) => "cd",
            Self::Mkdir(_) => "mkdir",
            Self::CreateFile { .. } => "createFile",
            Self::Ls => "ls",
            Self::Cat(_) => "cat",
            Self::Mv { .. } => "mv",
            Self::Cp { .. } => "cp",
            Self::PwdPath => "pwdPath",
            Self::Rm(_) => "rm",
        }
    }
}

/// Result of running a command, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Success or failure of a mutation or `cd`.
    Status(bool),
    Text(String),
    /// Rendered comma-joined.
    List(Vec<String>),
    /// `cat` found nothing.
    Absent,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(ok) => write!(f, "{}", ok),
            Self::Text(text) => write!(f, "{}", text),
            Self::List(items) => write!(f, "{}", items.join(", ")),
            Self::Absent => write!(f, "not found"),
        }
    }
}

/// Run a parsed command against the namespace.
pub fn run(ns: &mut Namespace, cmd: &Command) -> Output {
    let status = |result: Result<(), FsError>| {
        if let Err(ref err) = result {
            log_failure(cmd, err);
        }
        Output::Status(result.is_ok())
    };

    match cmd {
        Command::Cd(path) => status(ns.cd(path)),
        Command::Mkdir(path) => status(ns.mkdir(path)),
        Command::CreateFile { path, contents } => status(ns.create_file(path, contents.as_str())),
        Command::Ls => Output::List(ns.ls()),
        Command::Cat(path) => match ns.cat(path) {
            Ok(contents) => Output::Text(contents.to_string()),
            Err(err) => {
                log_failure(cmd, &err);
                Output::Absent
            }
        },
        Command::Mv { from, to } => status(ns.mv(from, to)),
        Command::Cp { from, to } => status(ns.cp(from, to)),
        Command::PwdPath => Output::Text(ns.pwd_path()),
        Command::Rm(path) => status(ns.rm(path)),
    }
}

fn log_failure(cmd: &Command, err: &FsError) {
    debug!(
        command = cmd.name(),
        missing = err.is_not_found(),
        error = %err,
        "command failed"
    );
}

/// Parse and run one command line, rendering the result as text.
///
/// Parse errors render as their message (`Command not found`,
/// `mv requires 2 arguments`).
pub fn execute(ns: &mut Namespace, line: &str) -> String {
    match Command::parse(line) {
        Ok(cmd) => run(ns, &cmd).to_string(),
        Err(err) => err.to_string(),
    }
}
