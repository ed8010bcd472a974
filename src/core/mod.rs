pub mod errors;
pub mod identity;
pub mod relation;
pub mod symbols;

pub use errors::{Error, Result, ResultExt};
pub use identity::{display_id, NodeKey};
pub use relation::{Relation, RelationIndex};
pub use symbols::{
    InterfaceNode, MethodSignature, Origin, SourceLocation, SymbolModel, TypeNode, TypeRef,
};
