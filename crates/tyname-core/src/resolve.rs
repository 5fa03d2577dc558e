//! Total name and hash lookups for any `'static` type.
//!
//! Registered and built-in types resolve to their canonical constants.
//! Everything else falls back to `core::any::type_name`, which is NOT stable
//! across compilers, builds or platforms: a caller that needs cross-build
//! hashes must register the type.

use crate::{hash::fnv1a_64_str, registry};

/// Canonical name of `T`, or the native type name when `T` is unregistered.
#[must_use]
pub fn name_of<T: ?Sized + 'static>() -> &'static str {
    registry::lookup::<T>().map_or_else(fallback_name::<T>, |entry| entry.name)
}

/// Canonical hash of `T`: FNV-1a of [`name_of`].
#[must_use]
pub fn hash_of<T: ?Sized + 'static>() -> u64 {
    registry::lookup::<T>().map_or_else(|| fnv1a_64_str(fallback_name::<T>()), |entry| entry.hash)
}

/// [`name_of`] for the type of `value`.
#[must_use]
pub fn name_of_val<T: ?Sized + 'static>(_value: &T) -> &'static str {
    name_of::<T>()
}

/// [`hash_of`] for the type of `value`.
#[must_use]
pub fn hash_of_val<T: ?Sized + 'static>(_value: &T) -> u64 {
    hash_of::<T>()
}

fn fallback_name<T: ?Sized>() -> &'static str {
    let name = core::any::type_name::<T>();
    tracing::trace!(name, "no canonical name registered, using native type name");

    name
}

///
/// TESTS
///
