//! Route identifiers.
//!
//! # Responsibilities
//! - Derive the dispatch key from a raw request path
//! - Provide exact, case-sensitive equality for registry lookups
//!
//! # Design Decisions
//! - Everything from the first `;` onward is dropped (legacy `;jsessionid=...` style
//!   path parameters), so decorated and undecorated paths share one key
//! - No other rewriting: no trailing-slash folding, no percent-decoding

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Normalized dispatch key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RouteIdentifier(String);

impl RouteIdentifier {
    /// Use `identifier` verbatim as a registry key.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// Normalize a raw request path into a route identifier.
    pub fn from_path(path: &str) -> Self {
        Self(normalize(path).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strip any `;` path-parameter suffix from `path`.
pub fn normalize(path: &str) -> &str {
    match path.find(';') {
        Some(idx) => &path[..idx],
        None => path,
    }
}

impl fmt::Display for RouteIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for RouteIdentifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RouteIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RouteIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_path_parameters() {
        assert_eq!(normalize("/auto/x;jsessionid=123"), "/auto/x");
        assert_eq!(normalize("/auto/x;a=1;b=2"), "/auto/x");
        assert_eq!(normalize("/auto/x"), "/auto/x");
    }

    #[test]
    fn test_normalize_edge_cases() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(";"), "");
        assert_eq!(normalize(";jsessionid=1"), "");
        assert_eq!(normalize("/cron/logCompilation;"), "/cron/logCompilation");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("/auto/emailWorker;foo=bar");
        assert_eq!(normalize(once), once);
    }

    #[test]
    fn test_from_path_keeps_case_and_slashes() {
        let id = RouteIdentifier::from_path("/Cron/LogCompilation/;x");
        assert_eq!(id.as_str(), "/Cron/LogCompilation/");
        assert_ne!(id, RouteIdentifier::new("/cron/logCompilation"));
    }

    #[test]
    fn test_display_matches_key() {
        let id = RouteIdentifier::from_path("/cron/unknown;x=1");
        assert_eq!(id.to_string(), "/cron/unknown");
    }
}
