//! `register app|site <name> <location>` and `register context <name>`

use std::io::Write;

use concher_core::LocationKind;

use crate::interpreter::{CommandError, Interpreter, Outcome};
use crate::style;

/// Define or overwrite a location.
pub fn location(
    it: &mut Interpreter<'_>,
    kind: LocationKind,
    name: String,
    target: String,
) -> Result<Outcome, CommandError> {
    let message = format!(
        "Registered {} {} at {}",
        style::name(&kind.to_string()),
        style::name(&name),
        target
    );
    if let Some(previous) = it.registry.define_location(name.into(), kind, target) {
        tracing::debug!(name = %previous.name, old_target = %previous.target, "location overwritten");
    }
    writeln!(it.out, "{message}")?;
    Ok(Outcome::MUTATED)
}

/// Define a context, resetting it to empty if it already exists.
pub fn context(it: &mut Interpreter<'_>, name: String) -> Result<Outcome, CommandError> {
    let message = format!("Registered context {}.", style::name(&name));
    if let Some(previous) = it.registry.define_context(name.into()) {
        tracing::debug!(name = %previous.name, dropped = previous.members.len(), "context reset");
    }
    writeln!(it.out, "{message}")?;
    Ok(Outcome::MUTATED)
}
