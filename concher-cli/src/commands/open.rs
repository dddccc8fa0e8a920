//! `open <name>`: launch a context's members in order, or a single location.

use std::io::Write;

use concher_core::{Location, RegistryError, Resolved};
use concher_launcher::Launcher;

use crate::interpreter::{CommandError, Interpreter, Outcome};
use crate::style;

pub fn run(it: &mut Interpreter<'_>, name: &str) -> Result<Outcome, CommandError> {
    match it.registry.resolve(name) {
        Resolved::Context(context) => {
            if context.is_empty() {
                writeln!(it.out, "{} is empty.", style::name(name))?;
                return Ok(Outcome::IDLE);
            }
            for member in &context.members {
                match it.registry.location(&member.0) {
                    Some(location) => launch(it.launcher, &mut *it.out, location)?,
                    None => writeln!(
                        it.out,
                        "{} {} is not registered.",
                        style::warning_label(),
                        style::name(&member.0)
                    )?,
                }
            }
        }
        Resolved::Location(location) => launch(it.launcher, &mut *it.out, location)?,
        Resolved::NotFound => return Err(RegistryError::NameNotFound(name.to_owned()).into()),
    }
    Ok(Outcome::IDLE)
}

/// A failed launch is reported and swallowed so the remaining members still start.
fn launch(launcher: &dyn Launcher, out: &mut dyn Write, location: &Location) -> std::io::Result<()> {
    match launcher.launch(location) {
        Ok(()) => {
            tracing::info!(name = %location.name, kind = %location.kind, "launched");
            Ok(())
        }
        Err(err) => writeln!(out, "{} {err}", style::launch_failed_label()),
    }
}
