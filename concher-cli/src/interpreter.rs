//! Command dispatch.
//!
//! [`Interpreter::execute`] parses one line, runs the matching handler and
//! recovers every command-level error by printing it. Only I/O failures on the
//! terminal escape to the caller.

use std::io::{self, Write};

use thiserror::Error;

use concher_core::{Registry, RegistryError};
use concher_launcher::Launcher;

use crate::commands;
use crate::console::Confirm;
use crate::parse::{self, Command, Registration};
use crate::style;

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub keep_running: bool,
    /// The registry must be written back.
    pub mutated: bool,
}

impl Outcome {
    pub const IDLE: Outcome = Outcome { keep_running: true, mutated: false };
    pub const MUTATED: Outcome = Outcome { keep_running: true, mutated: true };
    /// Stop and flush, whether or not anything changed this session.
    pub const QUIT: Outcome = Outcome { keep_running: false, mutated: true };
}

/// Why a command did nothing.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Wrong argument count or shape.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The user declined a confirmation.
    #[error("Cancelled.")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Everything a command may touch, borrowed for the duration of one line.
pub struct Interpreter<'a> {
    pub registry: &'a mut Registry,
    pub launcher: &'a dyn Launcher,
    pub confirm: &'a mut dyn Confirm,
    pub out: &'a mut dyn Write,
}

impl Interpreter<'_> {
    pub fn execute(&mut self, line: &str) -> io::Result<Outcome> {
        match parse::parse(line) {
            Ok(Some(command)) => self.dispatch(command),
            Ok(None) => Ok(Outcome::IDLE),
            Err(err) => self.report(err),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> io::Result<Outcome> {
        tracing::debug!(?command, "dispatch");
        let result = match command {
            Command::Quit => Ok(Outcome::QUIT),
            Command::Help => commands::help::run(self),
            Command::Open { name } => commands::open::run(self, &name),
            Command::List(target) => commands::list::run(self, target),
            Command::Register(Registration::Location { kind, name, target }) => {
                commands::register::location(self, kind, name, target)
            }
            Command::Register(Registration::Context { name }) => {
                commands::register::context(self, name)
            }
            Command::Remove { name, context } => {
                commands::remove::run(self, &name, context.as_deref())
            }
            Command::Add { location, context } => commands::add::run(self, &location, &context),
        };
        match result {
            Ok(outcome) => Ok(outcome),
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: CommandError) -> io::Result<Outcome> {
        match err {
            CommandError::Io(err) => return Err(err),
            CommandError::Cancelled => writeln!(self.out, "Cancelled.")?,
            other => writeln!(self.out, "{} {other}", style::error_label())?,
        }
        Ok(Outcome::IDLE)
    }
}
