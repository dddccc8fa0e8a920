//! `remove <name> [context]`
//!
//! With a context, drops `name` from that context only. Without one, removes
//! every entry called `name`: the location (cascading out of all contexts)
//! and/or the context. Both forms ask for confirmation first.

use std::io::Write;

use concher_core::RegistryError;

use crate::interpreter::{CommandError, Interpreter, Outcome};
use crate::style;

pub fn run(
    it: &mut Interpreter<'_>,
    name: &str,
    context: Option<&str>,
) -> Result<Outcome, CommandError> {
    match context {
        Some(context) => from_context(it, name, context),
        None => everywhere(it, name),
    }
}

fn from_context(
    it: &mut Interpreter<'_>,
    name: &str,
    context: &str,
) -> Result<Outcome, CommandError> {
    let ctx = it
        .registry
        .context(context)
        .ok_or_else(|| RegistryError::ContextNotFound(context.to_owned()))?;
    if !ctx.contains(name) {
        return Err(RegistryError::NotAMember {
            location: name.to_owned(),
            context: context.to_owned(),
        }
        .into());
    }

    let question = format!(
        "Remove {} from context {}?",
        style::name(name),
        style::name(context)
    );
    if !it.confirm.confirm(&mut *it.out, &question)? {
        return Err(CommandError::Cancelled);
    }

    it.registry.remove_member(context, name)?;
    writeln!(
        it.out,
        "Removed {} from context {}.",
        style::name(name),
        style::name(context)
    )?;
    Ok(Outcome::MUTATED)
}

fn everywhere(it: &mut Interpreter<'_>, name: &str) -> Result<Outcome, CommandError> {
    let is_location = it.registry.location(name).is_some();
    let is_context = it.registry.context(name).is_some();
    if !is_location && !is_context {
        return Err(RegistryError::NameNotFound(name.to_owned()).into());
    }

    let question = format!(
        "Remove all entries named {} from locations or contexts?",
        style::name(name)
    );
    if !it.confirm.confirm(&mut *it.out, &question)? {
        return Err(CommandError::Cancelled);
    }

    let mut removed = false;
    if is_location {
        it.registry.remove_location(name)?;
        writeln!(it.out, "Removed from locations: {}.", style::name(name))?;
        removed = true;
    }
    if is_context {
        it.registry.remove_context(name)?;
        writeln!(it.out, "Removed context: {}.", style::name(name))?;
        removed = true;
    }
    Ok(Outcome { keep_running: true, mutated: removed })
}
