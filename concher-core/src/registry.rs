//! In-memory registry of locations and contexts.
//!
//! Pure data operations, no I/O. Persistence lives in [`crate::store`].
//!
//! Both tables keep insertion order; redefining an existing name replaces the
//! entry in place so its position is stable across edits.

use std::collections::HashSet;

use crate::error::RegistryError;
use crate::types::{Context, ContextName, Location, LocationKind, LocationName};

/// The combined location and context tables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    locations: Vec<Location>,
    contexts: Vec<Context>,
}

/// What a bare name refers to. Contexts shadow locations of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Context(&'a Context),
    Location(&'a Location),
    NotFound,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-loaded tables. Later duplicates of a name win, in the
    /// position of the first occurrence. Repeated members of a context keep
    /// only their first occurrence.
    pub fn from_parts(locations: Vec<Location>, contexts: Vec<Context>) -> Self {
        let mut registry = Self::new();
        for location in locations {
            registry.upsert_location(location);
        }
        for mut context in contexts {
            let mut seen = HashSet::new();
            context.members.retain(|member| seen.insert(member.clone()));
            registry.upsert_context(context);
        }
        registry
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.contexts.is_empty()
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name.0 == name)
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name.0 == name)
    }

    /// Locations in insertion order. Each call starts a fresh pass.
    pub fn locations(&self) -> impl Iterator<Item = (&LocationName, &Location)> + '_ {
        self.locations.iter().map(|l| (&l.name, l))
    }

    /// Contexts in insertion order. Each call starts a fresh pass.
    pub fn contexts(&self) -> impl Iterator<Item = (&ContextName, &Context)> + '_ {
        self.contexts.iter().map(|c| (&c.name, c))
    }

    pub fn resolve(&self, name: &str) -> Resolved<'_> {
        if let Some(context) = self.context(name) {
            return Resolved::Context(context);
        }
        match self.location(name) {
            Some(location) => Resolved::Location(location),
            None => Resolved::NotFound,
        }
    }

    // -----------------------------------------------------------------------
    // Definitions (always succeed)
    // -----------------------------------------------------------------------

    /// Insert or overwrite a location. Returns the previous definition.
    pub fn define_location(
        &mut self,
        name: LocationName,
        kind: LocationKind,
        target: impl Into<String>,
    ) -> Option<Location> {
        self.upsert_location(Location { name, kind, target: target.into() })
    }

    /// Create an empty context, resetting any existing one of the same name.
    /// Returns the previous definition.
    pub fn define_context(&mut self, name: ContextName) -> Option<Context> {
        self.upsert_context(Context::new(name))
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    /// Append `location` to the end of `context`'s members.
    pub fn add_member(&mut self, context: &str, location: &str) -> Result<&Context, RegistryError> {
        let member = match self.location(location) {
            Some(l) => l.name.clone(),
            None => return Err(RegistryError::LocationNotFound(location.to_owned())),
        };
        let ctx = self.context_mut(context)?;
        if ctx.contains(location) {
            return Err(RegistryError::AlreadyMember {
                location: location.to_owned(),
                context: context.to_owned(),
            });
        }
        ctx.members.push(member);
        Ok(&*ctx)
    }

    /// Remove `location` from `context`'s members; other contexts are untouched.
    pub fn remove_member(&mut self, context: &str, location: &str) -> Result<(), RegistryError> {
        let ctx = self.context_mut(context)?;
        let Some(idx) = ctx.members.iter().position(|m| m.0 == location) else {
            return Err(RegistryError::NotAMember {
                location: location.to_owned(),
                context: context.to_owned(),
            });
        };
        ctx.members.remove(idx);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Delete a location and strip it from every context's members.
    pub fn remove_location(&mut self, name: &str) -> Result<Location, RegistryError> {
        let Some(idx) = self.locations.iter().position(|l| l.name.0 == name) else {
            return Err(RegistryError::LocationNotFound(name.to_owned()));
        };
        let removed = self.locations.remove(idx);
        for ctx in &mut self.contexts {
            ctx.members.retain(|m| m.0 != name);
        }
        Ok(removed)
    }

    /// Delete a context. Its member locations stay registered.
    pub fn remove_context(&mut self, name: &str) -> Result<Context, RegistryError> {
        let Some(idx) = self.contexts.iter().position(|c| c.name.0 == name) else {
            return Err(RegistryError::ContextNotFound(name.to_owned()));
        };
        Ok(self.contexts.remove(idx))
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn context_mut(&mut self, name: &str) -> Result<&mut Context, RegistryError> {
        self.contexts
            .iter_mut()
            .find(|c| c.name.0 == name)
            .ok_or_else(|| RegistryError::ContextNotFound(name.to_owned()))
    }

    fn upsert_location(&mut self, location: Location) -> Option<Location> {
        match self.locations.iter_mut().find(|l| l.name == location.name) {
            Some(slot) => Some(std::mem::replace(slot, location)),
            None => {
                self.locations.push(location);
                None
            }
        }
    }

    fn upsert_context(&mut self, context: Context) -> Option<Context> {
        match self.contexts.iter_mut().find(|c| c.name == context.name) {
            Some(slot) => Some(std::mem::replace(slot, context)),
            None => {
                self.contexts.push(context);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
