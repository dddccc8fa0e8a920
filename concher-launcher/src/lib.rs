//! Launching registered locations.
//!
//! The interpreter only sees the [`Launcher`] trait. [`SystemLauncher`] is the
//! host-backed implementation:
//!
//! - `Site` targets go to the platform URL opener (`xdg-open`, `open`,
//!   `cmd /C start`). Best effort: failures are logged, never reported.
//! - `App` targets run through the platform shell (`sh -c`, `cmd /C`) with
//!   all three stdio streams set to null.
//!
//! Children run in their own process group on Unix and are reaped by a
//! background thread.

pub mod error;

use std::process::{Command, Stdio};

use concher_core::{Location, LocationKind};

pub use error::LaunchError;

/// Something that can start a location.
pub trait Launcher {
    fn launch(&self, location: &Location) -> Result<(), LaunchError>;
}

/// Launches through the host's URL handler and shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, location: &Location) -> Result<(), LaunchError> {
        match location.kind {
            LocationKind::Site => {
                open_url(&location.target);
                Ok(())
            }
            LocationKind::App => spawn_detached(shell_command(&location.target)).map_err(|source| {
                LaunchError::Spawn {
                    name: location.name.0.clone(),
                    source,
                }
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

fn open_url(url: &str) {
    let result = spawn_detached(url_command(url));
    match result {
        Ok(()) => tracing::debug!(url, "handed url to opener"),
        Err(err) => tracing::warn!(url, error = %err, "url opener failed to start"),
    }
}

#[cfg(target_os = "macos")]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(windows)]
fn url_command(url: &str) -> Command {
    // The empty string is the window title `start` expects before the target.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(url);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn url_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

// ---------------------------------------------------------------------------
// Apps
// ---------------------------------------------------------------------------

/// `target` is a full command line, interpreted by the platform shell.
pub fn shell_command(target: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(target);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(target);
        cmd
    }
}

/// Start `cmd` with null stdio in a new process group, then hand the child
/// to a reaper thread.
fn spawn_detached(mut cmd: Command) -> std::io::Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }
    let mut child = cmd.spawn()?;
    let pid = child.id();
    tracing::debug!(pid, "spawned detached process");

    std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "detached process exited"),
            Err(err) => tracing::warn!(pid, error = %err, "failed to reap detached process"),
        })?;
    Ok(())
}
