// Test utility module for implmap integration tests
#![allow(dead_code)]

use implmap::{InterfaceNode, MethodSignature, NodeKey, Relation, TypeNode};
use std::path::PathBuf;

pub const APP: &str = "example.com/app";

/// Zero-argument method returning nothing.
pub fn method(name: &str) -> MethodSignature {
    MethodSignature::new(name, Vec::<&str>::new(), Vec::<&str>::new())
}

pub fn interface(name: &str, methods: &[&str]) -> InterfaceNode {
    InterfaceNode::new(APP, name, methods.iter().map(|m| method(m)).collect())
}

pub fn value_type(name: &str, methods: &[&str]) -> TypeNode {
    TypeNode::new(
        APP,
        name,
        methods.iter().map(|m| method(m)).collect(),
        Vec::new(),
    )
}

pub fn pointer_type(name: &str, methods: &[&str]) -> TypeNode {
    TypeNode::new(
        APP,
        name,
        Vec::new(),
        methods.iter().map(|m| method(m)).collect(),
    )
}

pub fn key(name: &str) -> NodeKey {
    NodeKey::new(APP, name)
}

pub fn relation(type_name: &str, interface_name: &str) -> Relation {
    Relation::new(key(type_name), key(interface_name), false)
}

// Helper to create temporary symbol files
pub fn create_symbol_file(content: &str, extension: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(format!("symbols.{}", extension));
    std::fs::write(&file_path, content).expect("Failed to write symbol file");
    (temp_dir, file_path)
}
