//! Loading symbol models produced by an upstream symbol provider.
//!
//! The on-disk records mirror the core types but carry pointer-receiver
//! methods separately; conversion goes through [`TypeNode::new`] so the
//! full method set is always derived, never trusted from input.

use crate::core::{
    Error, InterfaceNode, MethodSignature, Origin, Result, ResultExt, SourceLocation, SymbolModel,
    TypeNode,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolFile {
    #[serde(default)]
    pub interfaces: Vec<InterfaceRecord>,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceRecord {
    pub package_path: String,
    #[serde(default)]
    pub package_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    pub package_path: String,
    #[serde(default)]
    pub package_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub is_struct: bool,
    #[serde(default)]
    pub value_methods: Vec<MethodSignature>,
    #[serde(default)]
    pub pointer_methods: Vec<MethodSignature>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl From<InterfaceRecord> for InterfaceNode {
    fn from(record: InterfaceRecord) -> Self {
        let mut node = InterfaceNode::new(record.package_path, record.name, record.methods)
            .with_origin(record.origin);
        if let Some(package_name) = record.package_name {
            node = node.with_package_name(package_name);
        }
        if let Some(location) = record.location {
            node = node.with_location(location);
        }
        node
    }
}

impl From<TypeRecord> for TypeNode {
    fn from(record: TypeRecord) -> Self {
        let mut node = TypeNode::new(
            record.package_path,
            record.name,
            record.value_methods,
            record.pointer_methods,
        )
        .with_struct(record.is_struct);
        if let Some(package_name) = record.package_name {
            node = node.with_package_name(package_name);
        }
        if let Some(location) = record.location {
            node = node.with_location(location);
        }
        node
    }
}

impl SymbolFile {
    pub fn into_model(self) -> Result<SymbolModel> {
        SymbolModel::new(
            self.interfaces.into_iter().map(Into::into).collect(),
            self.types.into_iter().map(Into::into).collect(),
        )
    }
}

/// Input encodings understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolFormat {
    Json,
    Yaml,
}

impl SymbolFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn parse_symbol_model(contents: &str, format: SymbolFormat) -> Result<SymbolModel> {
    let file: SymbolFile = match format {
        SymbolFormat::Json => serde_json::from_str(contents)?,
        SymbolFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    file.into_model()
}

/// Read and decode a symbol file, choosing the format by extension.
pub fn load_symbol_model(path: &Path) -> Result<SymbolModel> {
    let format = SymbolFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read symbol file", path, e))?;

    let model = parse_symbol_model(&contents, format)
        .context(format!("Failed to load {}", path.display()))?;
    log::debug!(
        "Loaded {} interfaces and {} types from {}",
        model.interfaces().len(),
        model.types().len(),
        path.display()
    );
    Ok(model)
}
