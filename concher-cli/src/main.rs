//! Concher: a personal launcher for websites and apps, grouped into contexts.
//!
//! # Usage
//!
//! ```text
//! concher
//! > register site docs https://example.com
//! > register app term alacritty
//! > register context work
//! > add docs work
//! > open work
//! > quit
//! ```
//!
//! State lives in `~/.concher/` (or `$CONCHER_HOME`). Set `RUST_LOG=debug` to
//! see launches and saves on stderr.

mod commands;
mod console;
mod interpreter;
mod parse;
mod session;
mod style;
#[cfg(test)]
mod testing;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use concher_core::{store, Registry};
use concher_launcher::SystemLauncher;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "concher",
    version,
    about = "Open named websites and apps, alone or as contexts, from an interactive prompt",
    long_about = None,
)]
struct Cli {}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let dir = store::data_dir()?;
    println!("Welcome to Concher!");
    let mut registry = store::load_at(&dir)
        .with_context(|| format!("failed to load registry from {}", dir.display()))?;
    println!("{}", load_summary(&registry, &dir));
    println!("Type {} to learn more...", "help".bold());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(
        &mut registry,
        &SystemLauncher,
        stdin.lock(),
        &mut stdout.lock(),
        |registry| store::save_at(&dir, registry),
    )
}

/// Logs go to stderr so they never interleave with prompt output.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_summary(registry: &Registry, dir: &Path) -> String {
    if registry.is_empty() {
        return format!("Nothing saved in {} yet. Starting empty.", dir.display());
    }
    format!(
        "Loaded {} and {} from {}.",
        count(registry.locations().count(), "location"),
        count(registry.contexts().count(), "context"),
        dir.display()
    )
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
