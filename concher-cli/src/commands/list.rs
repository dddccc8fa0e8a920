//! `list [contexts|locations]`

use std::io::Write;

use crate::interpreter::{CommandError, Interpreter, Outcome};
use crate::parse::ListTarget;
use crate::style;

pub fn run(it: &mut Interpreter<'_>, target: ListTarget) -> Result<Outcome, CommandError> {
    match target {
        ListTarget::Contexts => contexts(it)?,
        ListTarget::Locations => locations(it)?,
    }
    Ok(Outcome::IDLE)
}

fn contexts(it: &mut Interpreter<'_>) -> std::io::Result<()> {
    let mut any = false;
    for (name, context) in it.registry.contexts() {
        any = true;
        if context.is_empty() {
            writeln!(it.out, "{}: (empty)", style::name(&name.0))?;
            continue;
        }
        let members: Vec<&str> = context.members.iter().map(|m| m.0.as_str()).collect();
        writeln!(it.out, "{}: {}", style::name(&name.0), members.join(", "))?;
    }
    if !any {
        writeln!(it.out, "No contexts found.")?;
    }
    Ok(())
}

fn locations(it: &mut Interpreter<'_>) -> std::io::Result<()> {
    let mut any = false;
    for (name, location) in it.registry.locations() {
        any = true;
        writeln!(
            it.out,
            "{}: {} → {}",
            style::name(&name.0),
            location.kind,
            location.target
        )?;
    }
    if !any {
        writeln!(it.out, "No locations registered.")?;
    }
    Ok(())
}
