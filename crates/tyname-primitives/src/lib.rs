//! Built-in primitive table shared by the naming core, the build-time code
//! generator and the CLI.

#[macro_use]
mod macros;

///
/// PrimitiveKind
///
/// Rust types that carry a fixed, portable canonical name.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PrimitiveKind {
    Bool,
    Char,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    Text,
}

impl PrimitiveKind {
    /// Return the full metadata descriptor for one primitive kind.
    #[must_use]
    pub const fn metadata(self) -> PrimitiveMetadata {
        primitive_kind_registry!(metadata_from_registry, self)
    }

    /// Canonical name, e.g. `"uint"` for `u32`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    /// Literal the canonical hash is computed from.
    #[must_use]
    pub const fn hash_source(self) -> &'static str {
        self.metadata().hash_source
    }

    /// Rust spelling of the type this kind stands for.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        self.metadata().rust_type
    }

    /// Reverse lookup from a canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        primitive_kind_registry!(kind_from_name_registry, name)
    }
}

///
/// PrimitiveMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimitiveMetadata {
    pub name: &'static str,
    pub hash_source: &'static str,
    pub rust_type: &'static str,
}

/// Ordered list of all primitive kinds in registry order.
pub const ALL_PRIMITIVE_KINDS: [PrimitiveKind; 11] =
    primitive_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///
