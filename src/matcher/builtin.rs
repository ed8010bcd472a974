//! Interfaces that exist without being declared in any analyzed package.

use crate::core::{InterfaceNode, MethodSignature, Origin};

/// The predeclared `error` interface: `Error() string`.
///
/// It has no package path, so its key sorts before every declared node.
pub fn error_interface() -> InterfaceNode {
    InterfaceNode::new(
        "",
        "error",
        vec![MethodSignature::new(
            "Error",
            Vec::<&str>::new(),
            ["string"],
        )],
    )
    .with_origin(Origin::Stdlib)
}

/// Append the predeclared interfaces that are not already present.
pub fn with_builtins(interfaces: &[InterfaceNode]) -> Vec<InterfaceNode> {
    let builtin = error_interface();
    let mut all = interfaces.to_vec();
    if !all.iter().any(|iface| iface.key == builtin.key) {
        all.push(builtin);
    }
    all
}
