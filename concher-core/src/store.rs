//! On-disk persistence for the registry.
//!
//! # Storage layout
//!
//! ```text
//! ~/.concher/              (mode 0700, or $CONCHER_HOME)
//!   locations.yaml         (mode 0600)
//!   contexts.yaml          (mode 0600)
//! ```
//!
//! The two tables are written independently. There is no transaction across
//! them: a crash between the two writes can leave them out of step.
//!
//! # API pattern
//!
//! Every function takes the data directory explicitly (`fn_at(dir: &Path, …)`);
//! tests pass a `TempDir`, the binary passes [`data_dir`].

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{io_err, StoreError};
use crate::registry::Registry;
use crate::types::{Context, Location};

/// Overrides the data directory when set.
pub const DATA_DIR_ENV: &str = "CONCHER_HOME";

pub const LOCATIONS_FILE: &str = "locations.yaml";
pub const CONTEXTS_FILE: &str = "contexts.yaml";

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct LocationsFile {
    version: u32,
    #[serde(default)]
    locations: Vec<Location>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContextsFile {
    version: u32,
    #[serde(default)]
    contexts: Vec<Context>,
}

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `$CONCHER_HOME` if set and non-empty, else `<home>/.concher/`. Pure, no I/O.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(StoreError::HomeNotFound)?;
    Ok(home.join(".concher"))
}

pub fn locations_path_at(dir: &Path) -> PathBuf {
    dir.join(LOCATIONS_FILE)
}

pub fn contexts_path_at(dir: &Path) -> PathBuf {
    dir.join(CONTEXTS_FILE)
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// Load both tables from `dir`. A missing file is an empty table; a malformed
/// one is a [`StoreError::Parse`] naming the file, and one written by another
/// format version is a [`StoreError::UnsupportedVersion`].
pub fn load_at(dir: &Path) -> Result<Registry, StoreError> {
    let path = locations_path_at(dir);
    let locations = match read_table::<LocationsFile>(&path)? {
        Some(file) => {
            check_version(&path, file.version)?;
            file.locations
        }
        None => Vec::new(),
    };
    let path = contexts_path_at(dir);
    let contexts = match read_table::<ContextsFile>(&path)? {
        Some(file) => {
            check_version(&path, file.version)?;
            file.contexts
        }
        None => Vec::new(),
    };

    tracing::info!(
        dir = %dir.display(),
        locations = locations.len(),
        contexts = contexts.len(),
        "registry loaded"
    );
    Ok(Registry::from_parts(locations, contexts))
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "not found, starting empty");
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    if contents.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(&contents)
        .map(Some)
        .map_err(|e| StoreError::Parse { path: path.to_path_buf(), source: e })
}

fn check_version(path: &Path, found: u32) -> Result<(), StoreError> {
    if found == FORMAT_VERSION {
        Ok(())
    } else {
        Err(StoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            found,
            expected: FORMAT_VERSION,
        })
    }
}

// ---------------------------------------------------------------------------
// 3. Save (atomic per file)
// ---------------------------------------------------------------------------

/// Write both tables into `dir`, creating it (mode `0700`) if needed.
pub fn save_at(dir: &Path, registry: &Registry) -> Result<(), StoreError> {
    ensure_dir(dir)?;

    let locations = LocationsFile {
        version: FORMAT_VERSION,
        locations: registry.locations().map(|(_, l)| l.clone()).collect(),
    };
    write_table(&locations_path_at(dir), &locations)?;

    let contexts = ContextsFile {
        version: FORMAT_VERSION,
        contexts: registry.contexts().map(|(_, c)| c.clone()).collect(),
    };
    write_table(&contexts_path_at(dir), &contexts)?;

    tracing::debug!(dir = %dir.display(), "registry saved");
    Ok(())
}

/// Write flow: serialize → `.tmp` sibling → `chmod 0600` → `rename`.
fn write_table<T: Serialize>(path: &Path, table: &T) -> Result<(), StoreError> {
    let yaml = serde_yaml::to_string(table)?;
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, yaml).map_err(|e| io_err(&tmp_path, e))?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, path).map_err(|e| io_err(path, e))?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        set_dir_permissions(dir)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
