//! Core of tyname: the `TypeName` trait, the built-in table, the FNV-1a
//! hasher, the load-time registry and the registration macros.

#[macro_use]
mod macros;

// public exports are one module level down
pub mod builtins;
pub mod hash;
pub mod registry;
pub mod resolve;
pub mod traits;

pub use hash::{fnv1a_64, fnv1a_64_str};
pub use registry::TypeEntry;
pub use resolve::{hash_of, hash_of_val, name_of, name_of_val};
pub use traits::{Const, TypeName, type_hash, type_name};
pub use tyname_primitives::{ALL_PRIMITIVE_KINDS, PrimitiveKind};

/// re-exports
///
/// expanded macros reach their dependencies through here, so a crate that
/// registers types only needs to depend on tyname
pub mod __reexports {
    pub use ctor;
}

///
/// TESTS
///
