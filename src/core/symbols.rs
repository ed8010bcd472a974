//! Symbol model: interfaces, types and their method signatures.
//!
//! This is the vocabulary shared by the matcher and the partitioner. Every
//! entity is built once from a symbol provider snapshot and never mutated.

use super::errors::{Error, Result};
use super::identity::NodeKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Canonical type string as produced by the symbol provider.
///
/// The crate never interprets the contents. Equality between two refs is
/// decided by a [`crate::matcher::TypeIdentity`] predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(pub String);

impl TypeRef {
    pub fn new(repr: impl Into<String>) -> Self {
        Self(repr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A method name with its ordered parameter and result types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub params: Vec<TypeRef>,
    #[serde(default)]
    pub results: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
}

impl MethodSignature {
    pub fn new<P, R>(name: impl Into<String>, params: P, results: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<TypeRef>,
        R: IntoIterator,
        R::Item: Into<TypeRef>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            results: results.into_iter().map(Into::into).collect(),
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut params: Vec<String> = self.params.iter().map(|p| p.0.clone()).collect();
        if self.variadic {
            if let Some(last) = params.last_mut() {
                *last = format!("...{}", last.trim_start_matches("[]"));
            }
        }
        write!(f, "{}({})", self.name, params.join(", "))?;
        match self.results.len() {
            0 => Ok(()),
            1 => write!(f, " {}", self.results[0]),
            _ => {
                let results: Vec<&str> = self.results.iter().map(TypeRef::as_str).collect();
                write!(f, " ({})", results.join(", "))
            }
        }
    }
}

/// Where an interface was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Stdlib,
    #[default]
    User,
}

/// Source position hint for a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
}

/// A declared interface: a named set of required method signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceNode {
    pub key: NodeKey,
    pub package_name: String,
    pub methods: Vec<MethodSignature>,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl InterfaceNode {
    pub fn new(
        package_path: impl Into<String>,
        name: impl Into<String>,
        methods: Vec<MethodSignature>,
    ) -> Self {
        let key = NodeKey::new(package_path, name);
        let package_name = key.short_package().to_string();
        Self {
            key,
            package_name,
            methods,
            origin: Origin::User,
            location: None,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Interfaces with no required methods are satisfied by everything and
    /// never take part in matching.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn is_stdlib(&self) -> bool {
        self.origin == Origin::Stdlib
    }
}

/// A concrete named type with its two method-set views.
///
/// `value_methods` are the methods callable on a value of the type.
/// `full_methods` adds pointer-receiver methods and is always a superset of
/// `value_methods`; the only way to build a `TypeNode` is [`TypeNode::new`],
/// which derives the full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeNode {
    pub key: NodeKey,
    pub package_name: String,
    pub is_struct: bool,
    value_methods: Vec<MethodSignature>,
    full_methods: Vec<MethodSignature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl TypeNode {
    /// Build a type from its value-receiver methods and its pointer-receiver
    /// methods. A pointer method with the same name as a value method is
    /// ignored when building the full set.
    pub fn new(
        package_path: impl Into<String>,
        name: impl Into<String>,
        value_methods: Vec<MethodSignature>,
        pointer_methods: Vec<MethodSignature>,
    ) -> Self {
        let key = NodeKey::new(package_path, name);
        let package_name = key.short_package().to_string();

        let value_names: HashSet<&str> = value_methods.iter().map(|m| m.name.as_str()).collect();
        let pointer_only: Vec<MethodSignature> = pointer_methods
            .into_iter()
            .filter(|m| !value_names.contains(m.name.as_str()))
            .collect();
        let full_methods = value_methods.iter().cloned().chain(pointer_only).collect();

        Self {
            key,
            package_name,
            is_struct: false,
            value_methods,
            full_methods,
            location: None,
        }
    }

    pub fn with_struct(mut self, is_struct: bool) -> Self {
        self.is_struct = is_struct;
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = package_name.into();
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Methods exposed when the type is used by value.
    pub fn value_methods(&self) -> &[MethodSignature] {
        &self.value_methods
    }

    /// Methods exposed through a pointer: value methods plus pointer methods.
    pub fn full_methods(&self) -> &[MethodSignature] {
        &self.full_methods
    }
}

/// An immutable snapshot of interfaces and types from one analysis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolModel {
    interfaces: Vec<InterfaceNode>,
    types: Vec<TypeNode>,
}

impl SymbolModel {
    /// Build a model, rejecting duplicate identities.
    pub fn new(interfaces: Vec<InterfaceNode>, types: Vec<TypeNode>) -> Result<Self> {
        let mut seen = HashSet::new();
        for iface in &interfaces {
            if !seen.insert(&iface.key) {
                return Err(Error::duplicate("interface", &iface.key));
            }
        }

        let mut seen = HashSet::new();
        for ty in &types {
            if !seen.insert(&ty.key) {
                return Err(Error::duplicate("type", &ty.key));
            }
        }

        Ok(Self { interfaces, types })
    }

    pub fn interfaces(&self) -> &[InterfaceNode] {
        &self.interfaces
    }

    pub fn types(&self) -> &[TypeNode] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.types.is_empty()
    }
}
