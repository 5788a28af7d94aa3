//! Registry storage.
//!
//! # Responsibilities
//! - Collect `(identifier, descriptor)` pairs during startup
//! - Freeze them into an immutable lookup table
//! - Answer read-only lookups
//!
//! # Design Decisions
//! - `RegistryBuilder::build` is the only way to obtain a `Registry`, so every
//!   registration happens-before the table is shared
//! - Duplicate identifiers: last write wins (configuration-time contract)
//! - Exact-string keys in a `HashMap`; O(1) lookup

use std::collections::HashMap;

use crate::action::AutomatedAction;
use crate::registry::descriptor::HandlerDescriptor;
use crate::registry::identifier::RouteIdentifier;

/// Mutable registration phase of the registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<RouteIdentifier, HandlerDescriptor>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous mapping for `identifier`.
    pub fn register(
        &mut self,
        identifier: impl Into<RouteIdentifier>,
        descriptor: HandlerDescriptor,
    ) -> &mut Self {
        let identifier = identifier.into();
        if identifier.as_str().contains(';') {
            // Lookups are normalized, so this entry can never be reached.
            tracing::warn!(
                identifier = %identifier,
                "Registered identifier contains ';' and will never match"
            );
        }
        if let Some(previous) = self.entries.insert(identifier.clone(), descriptor) {
            tracing::debug!(
                identifier = %identifier,
                previous = previous.name().unwrap_or("<unmapped>"),
                replacement = descriptor.name().unwrap_or("<unmapped>"),
                "Route re-registered; keeping latest mapping"
            );
        }
        self
    }

    /// Map `identifier` to the default-constructible handler `T`.
    pub fn map<T>(&mut self, identifier: impl Into<RouteIdentifier>) -> &mut Self
    where
        T: AutomatedAction + Default + 'static,
    {
        self.register(identifier, HandlerDescriptor::of::<T>())
    }

    /// Register `identifier` with the unmapped marker.
    pub fn unmapped(&mut self, identifier: impl Into<RouteIdentifier>) -> &mut Self {
        self.register(identifier, HandlerDescriptor::unmapped())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the table, leaving the builder empty.
    pub fn build(&mut self) -> Registry {
        let registry = Registry {
            entries: std::mem::take(&mut self.entries),
        };
        tracing::debug!(routes = registry.len(), "Dispatch registry built");
        registry
    }
}

/// Immutable route identifier → handler descriptor table.
///
/// Shared across request tasks behind an `Arc`; never mutated after `build`.
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<RouteIdentifier, HandlerDescriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Exact-match lookup of an already normalized identifier.
    pub fn resolve(&self, identifier: &str) -> Option<&HandlerDescriptor> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&RouteIdentifier, &HandlerDescriptor)> {
        self.entries.iter()
    }

    /// Entries sorted by identifier, for listings.
    pub fn routes(&self) -> Vec<(&RouteIdentifier, &HandlerDescriptor)> {
        let mut routes: Vec<_> = self.entries.iter().collect();
        routes.sort_by(|a, b| a.0.cmp(b.0));
        routes
    }
}
