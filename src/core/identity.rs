//! Node identity and display identifiers.
//!
//! Interfaces and types are identified by their declaring package path plus
//! their name. Two nodes with the same short name in different packages are
//! distinct nodes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static NON_IDENT_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Identity of an interface or a type: `(package_path, name)`.
///
/// The derived ordering compares the package path first and the name second.
/// The partitioner relies on this ordering to chunk types reproducibly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    pub package_path: String,
    pub name: String,
}

impl NodeKey {
    pub fn new(package_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package_path: package_path.into(),
            name: name.into(),
        }
    }

    /// Last `/`-separated segment of the package path.
    pub fn short_package(&self) -> &str {
        self.package_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.package_path)
    }

    /// Whether the name is visible outside its declaring package.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package_path.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package_path, self.name)
        }
    }
}

/// Stable, sanitized identifier for a node, suitable for renderers.
///
/// The same `(package_name, name)` pair always yields the same identifier.
pub fn display_id(package_name: &str, name: &str) -> String {
    let joined = if package_name.is_empty() {
        name.to_string()
    } else {
        format!("{package_name}_{name}")
    };
    NON_IDENT_CHARS.replace_all(&joined, "_").into_owned()
}
