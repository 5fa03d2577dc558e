//! Stable canonical names and FNV-1a hashes for statically-known types.
//!
//! ## Crate layout
//! - `core`: the `TypeName` trait, built-in table, hasher and registry.
//! - `TypeName` derive: registration at the type's declaration site.
//! - `type_name!`: declarative registration, including types reached
//!   through a path.
//!
//! Two lookup paths share one contract:
//! - `type_name::<T>()` / `type_hash::<T>()` are `const fn`s over
//!   `T: TypeName`, usable as constants and `match` patterns;
//! - `name_of::<T>()` / `hash_of::<T>()` accept any `'static` type and fall
//!   back to `core::any::type_name` when `T` has no registration. The
//!   fallback is not stable across compilers or builds.
//!
//! ```
//! use tyname::{Const, TypeName, type_hash, type_name};
//!
//! #[derive(TypeName)]
//! struct Widget;
//!
//! assert_eq!(type_name::<Widget>(), "Widget");
//! assert_eq!(type_name::<Const<Widget>>(), "const Widget");
//! assert_eq!(type_hash::<Widget>(), tyname::fnv1a_64(b"Widget"));
//! assert_eq!(type_name::<u32>(), "uint");
//! ```
//!
//! A type can be registered once. Registering it again does not compile:
//!
//! ```compile_fail,E0119
//! struct Widget;
//!
//! tyname::type_name!(Widget);
//! tyname::type_name!(Widget);
//! ```
//!
//! ```compile_fail,E0119
//! #[derive(tyname::TypeName)]
//! struct Widget;
//!
//! tyname::type_name!(Widget => "Widget");
//! ```
//!
//! Built-ins are already registered:
//!
//! ```compile_fail
//! tyname::type_name!(u32 => "u32");
//! ```
//!
//! `TypeName` cannot be implemented by hand, so no impl can pick a hash
//! other than the FNV-1a of its name:
//!
//! ```compile_fail,E0277
//! struct Forged;
//!
//! impl tyname::TypeName for Forged {
//!     const NAME: &'static str = "Forged";
//!     const CONST_NAME: &'static str = "const Forged";
//!     const HASH: u64 = 42;
//! }
//! ```
//!
//! `Const<T>` is never registered on its own:
//!
//! ```compile_fail
//! struct Widget;
//!
//! tyname::type_name!(Widget);
//! tyname::type_name!(tyname::Const<Widget> => "frozen Widget");
//! ```

pub use tyname_core as core;
pub use tyname_derive::TypeName;

pub use tyname_core::{
    ALL_PRIMITIVE_KINDS, Const, PrimitiveKind, TypeEntry, TypeName, fnv1a_64, fnv1a_64_str,
    hash_of, hash_of_val, include_type_names, name_of, name_of_val, registry, type_hash,
    type_name,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings the trait into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{Const, TypeName, hash_of, name_of, type_hash, type_name};
}
