use crate::core::TypeRef;

/// Decides whether two type references denote the same type.
///
/// The symbol provider owns type identity. The matcher only asks this
/// predicate; it never inspects type strings itself.
pub trait TypeIdentity: Sync {
    fn same_type(&self, a: &TypeRef, b: &TypeRef) -> bool;
}

/// Identity by exact canonical string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactIdentity;

impl TypeIdentity for ExactIdentity {
    fn same_type(&self, a: &TypeRef, b: &TypeRef) -> bool {
        a == b
    }
}

impl<F> TypeIdentity for F
where
    F: Fn(&TypeRef, &TypeRef) -> bool + Sync,
{
    fn same_type(&self, a: &TypeRef, b: &TypeRef) -> bool {
        self(a, b)
    }
}
