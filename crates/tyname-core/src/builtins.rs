//! Built-in canonical names, generated from the shared primitive table.

use crate::{
    hash::fnv1a_64_str,
    traits::{TypeName, sealed::Registered},
};
use tyname_primitives::{PrimitiveKind, primitive_kind_registry};

// Each built-in hashes its `hash_source` literal instead of `NAME`.
macro_rules! impl_type_name_from_registry {
    ( @entries $( ($prim:ident, $ty:ty, name = $name:literal, hash_source = $hash_source:literal) ),* $(,)? ) => {
        $(
            impl Registered for $ty {}
            impl TypeName for $ty {
                const NAME: &'static str = $name;
                const CONST_NAME: &'static str = concat!("const ", $name);
                const HASH: u64 = fnv1a_64_str($hash_source);
            }
        )*
    };
}

primitive_kind_registry!(impl_type_name_from_registry);

/// Canonical hash of one built-in kind, matching its `TypeName::HASH`.
#[must_use]
pub const fn builtin_hash(kind: PrimitiveKind) -> u64 {
    fnv1a_64_str(kind.hash_source())
}

///
/// TESTS
///
