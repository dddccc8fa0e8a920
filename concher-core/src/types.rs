//! Domain types for the Concher registry.
//!
//! All types are serializable/deserializable via serde + serde_yaml.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a launchable location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationName(pub String);

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for LocationName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LocationName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed name for a context (an ordered group of locations).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextName(pub String);

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ContextName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContextName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a location is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// A URL opened with the host's default handler.
    Site,
    /// A command line started as a detached process.
    App,
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Site => write!(f, "site"),
            LocationKind::App => write!(f, "app"),
        }
    }
}

impl FromStr for LocationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "site" => Ok(Self::Site),
            "app" => Ok(Self::App),
            other => Err(format!("unknown location kind '{other}'; expected: app, site")),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A named launchable target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: LocationName,
    pub kind: LocationKind,
    /// URL for sites, shell command line for apps.
    pub target: String,
}

/// A named, ordered group of location names. Order is launch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub name: ContextName,
    #[serde(default)]
    pub members: Vec<LocationName>,
}

impl Context {
    /// An empty context.
    pub fn new(name: ContextName) -> Self {
        Self { name, members: Vec::new() }
    }

    pub fn contains(&self, location: &str) -> bool {
        self.members.iter().any(|m| m.0 == location)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
