//! The read–dispatch–persist loop.
//!
//! Lifecycle: the caller loads the registry, then [`run`] prompts, executes
//! one line at a time and calls `save` after every command that mutated it.
//! `quit` always counts as a mutation, so the registry is written on exit even
//! when nothing changed. End of input behaves like `quit`.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};

use concher_core::{Registry, StoreError};
use concher_launcher::Launcher;

use crate::console::LineInput;
use crate::interpreter::Interpreter;
use crate::parse::Command;

pub const PROMPT: &str = "> ";

pub fn run<R, S>(
    registry: &mut Registry,
    launcher: &dyn Launcher,
    input: R,
    out: &mut dyn Write,
    mut save: S,
) -> Result<()>
where
    R: BufRead,
    S: FnMut(&Registry) -> Result<(), StoreError>,
{
    let mut input = LineInput::new(input);
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let line = input.next_line().context("failed to read command")?;

        let mut interpreter = Interpreter {
            registry: &mut *registry,
            launcher,
            confirm: &mut input,
            out: &mut *out,
        };
        let outcome = match line {
            Some(line) => interpreter.execute(&line),
            None => {
                writeln!(interpreter.out)?;
                interpreter.dispatch(Command::Quit)
            }
        }
        .context("failed to write to terminal")?;

        if outcome.mutated {
            save(registry).context("failed to save registry")?;
        }
        if !outcome.keep_running {
            return Ok(());
        }
    }
}
