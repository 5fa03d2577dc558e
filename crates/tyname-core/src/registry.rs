//! Load-time registry backing the total lookups in `resolve`.
//!
//! Seeded with the built-in table on first access. `type_name!` and the
//! derive add one entry for `T` and one for `Const<T>` from a constructor
//! that runs before `main`. Entries are the per-type constants, so the
//! registry never holds anything a second registration could change.

use crate::traits::{Const, TypeName};
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tyname_primitives::primitive_kind_registry;

static REGISTRY: LazyLock<RwLock<Registry>> =
    LazyLock::new(|| RwLock::new(Registry::with_builtins()));

///
/// TypeEntry
///
/// One registered (type, canonical name, canonical hash) association.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TypeEntry {
    pub type_id: TypeId,
    pub name: &'static str,
    pub hash: u64,
}

impl TypeEntry {
    /// Build the entry for `T` from its `TypeName` constants.
    #[must_use]
    pub fn of<T: TypeName + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: T::NAME,
            hash: T::HASH,
        }
    }
}

///
/// Registry
///

#[derive(Debug, Default)]
struct Registry {
    by_type: HashMap<TypeId, TypeEntry>,
}

impl Registry {
    fn with_builtins() -> Self {
        macro_rules! builtin_entries {
            ( @entries $( ($prim:ident, $ty:ty, name = $name:literal, hash_source = $hash_source:literal) ),* $(,)? ) => {
                [ $( TypeEntry::of::<$ty>(), TypeEntry::of::<Const<$ty>>() ),* ]
            };
        }

        let mut registry = Self::default();
        for entry in primitive_kind_registry!(builtin_entries) {
            registry.insert(entry);
        }

        registry
    }

    // Returns false when the type was already present.
    fn insert(&mut self, entry: TypeEntry) -> bool {
        let mut inserted = false;
        self.by_type.entry(entry.type_id).or_insert_with(|| {
            inserted = true;
            entry
        });

        inserted
    }
}

fn registry_read() -> RwLockReadGuard<'static, Registry> {
    // entries are immutable constants, so a poisoned guard is still consistent
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn registry_write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register `T` and `Const<T>`. Registering the same type again is a no-op.
pub fn register<T: TypeName + ?Sized>() {
    let entry = TypeEntry::of::<T>();
    let const_entry = TypeEntry::of::<Const<T>>();

    let mut registry = registry_write();
    if registry.insert(entry) {
        tracing::debug!(
            name = entry.name,
            hash = format_args!("{:#018x}", entry.hash),
            "registered canonical type name"
        );
    }
    registry.insert(const_entry);
}

/// Registered entry for `T`, if any.
#[must_use]
pub fn lookup<T: ?Sized + 'static>() -> Option<TypeEntry> {
    lookup_id(TypeId::of::<T>())
}

/// Registered entry for a `TypeId`, if any.
#[must_use]
pub fn lookup_id(type_id: TypeId) -> Option<TypeEntry> {
    registry_read().by_type.get(&type_id).copied()
}

/// Whether `T` has an explicit canonical name in the registry.
#[must_use]
pub fn is_registered<T: ?Sized + 'static>() -> bool {
    lookup::<T>().is_some()
}

/// Snapshot of every registered entry, sorted by name.
#[must_use]
pub fn entries() -> Vec<TypeEntry> {
    let mut entries: Vec<_> = registry_read().by_type.values().copied().collect();
    entries.sort_by(|a, b| a.name.cmp(b.name).then(a.hash.cmp(&b.hash)));

    entries
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::fnv1a_64;

    struct Sprocket;

    impl crate::traits::sealed::Registered for Sprocket {}
    impl TypeName for Sprocket {
        const NAME: &'static str = "Sprocket";
        const CONST_NAME: &'static str = "const Sprocket";
    }

    struct Unregistered;

    #[test]
    fn builtins_are_present_without_registration() {
        let entry = lookup::<u32>().expect("u32 is built in");
        assert_eq!(entry.name, "uint");
        assert_eq!(entry.hash, fnv1a_64(b"uint"));

        let entry = lookup::<Const<String>>().expect("const string is built in");
        assert_eq!(entry.name, "const string");
    }

    #[test]
    fn register_adds_type_and_const_form() {
        register::<Sprocket>();

        assert_eq!(lookup::<Sprocket>().map(|e| e.name), Some("Sprocket"));
        assert_eq!(
            lookup::<Const<Sprocket>>().map(|e| e.hash),
            Some(fnv1a_64(b"const Sprocket"))
        );
    }

    #[test]
    fn register_twice_is_a_no_op() {
        register::<Sprocket>();
        register::<Sprocket>();

        let count = entries().iter().filter(|e| e.name == "Sprocket").count();
        assert_eq!(count, 1);
        assert_eq!(lookup::<Sprocket>(), Some(TypeEntry::of::<Sprocket>()));
    }

    #[test]
    fn unregistered_types_are_absent() {
        assert!(!is_registered::<Unregistered>());
        assert!(lookup::<Const<Unregistered>>().is_none());
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let entries = entries();
        assert!(entries.windows(2).all(|w| w[0].name <= w[1].name));
        assert!(entries.iter().any(|e| e.name == "const char"));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut registry = Registry::default();
        assert!(registry.insert(TypeEntry::of::<bool>()));
        assert!(!registry.insert(TypeEntry::of::<bool>()));
    }
}
