//! `help`: the command summary.

use std::io::Write;

use colored::Colorize;

use crate::interpreter::{CommandError, Interpreter, Outcome};

const COMMANDS: &[(&str, &str)] = &[
    ("open <name>", "open a context (every member, in order) or a single location  [o]"),
    ("<name>", "same as open <name>"),
    ("list [contexts|locations]", "show a table, contexts by default  [l]"),
    ("register app|site <name> <location>", "add or update a location  [r]"),
    ("register context <name>", "create a context, emptying any existing one  [r]"),
    ("add <name> <context>", "append a location to a context"),
    ("remove <name> <context>", "take a location out of one context"),
    ("remove <name>", "delete a location (from every context) and/or a context"),
    ("help", "show this summary  [?]"),
    ("quit", "save and exit  [q]"),
];

pub fn run(it: &mut Interpreter<'_>) -> Result<Outcome, CommandError> {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    writeln!(it.out, "{}", "Commands:".bold())?;
    for (usage, about) in COMMANDS {
        writeln!(it.out, "  {usage:<width$}  {about}")?;
    }
    writeln!(it.out, "Names cannot contain spaces.")?;
    Ok(Outcome::IDLE)
}
