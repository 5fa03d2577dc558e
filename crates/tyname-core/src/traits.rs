use crate::hash::fnv1a_64_str;
use std::{fmt, marker::PhantomData};

const CONST_PREFIX: &str = "const ";

///
/// TypeName
///
/// Canonical, build-stable name and hash for one type.
///
/// Only `type_name!` and `#[derive(TypeName)]` implement it: both keep
/// `CONST_NAME` and `HASH` derived from the same literal and record the type
/// in the registry. Implementing it twice for one type is a coherence error,
/// which is how a duplicate registration is rejected at build time.
///

pub trait TypeName: sealed::Registered + 'static {
    /// Canonical name, e.g. `"uint"` for `u32`.
    const NAME: &'static str;

    /// Name of [`Const<Self>`]: `"const "` followed by [`Self::NAME`].
    const CONST_NAME: &'static str;

    /// FNV-1a of the canonical name.
    const HASH: u64 = fnv1a_64_str(Self::NAME);

    /// Set only by the [`Const`] wrapper.
    #[doc(hidden)]
    const IS_CONST: bool = false;
}

#[doc(hidden)]
pub mod sealed {
    /// Emitted by the registration macros next to every `TypeName` impl.
    pub trait Registered {}
}

///
/// Const
///
/// Marker standing in for a const-qualified `T`.
/// Its name is always derived from `T` and cannot be registered separately.
///

pub struct Const<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> fmt::Debug for Const<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Const")
    }
}

impl<T: TypeName + ?Sized> sealed::Registered for Const<T> {}

impl<T: TypeName + ?Sized> TypeName for Const<T> {
    const NAME: &'static str = {
        assert!(
            const_name_is_derived(T::CONST_NAME, T::NAME, T::IS_CONST),
            "TypeName::CONST_NAME must be \"const \" followed by TypeName::NAME"
        );
        T::CONST_NAME
    };

    // const const T is const T
    const CONST_NAME: &'static str = Self::NAME;
    const IS_CONST: bool = true;
}

/// Canonical name of `T`, resolved at compile time.
#[must_use]
pub const fn type_name<T: TypeName + ?Sized>() -> &'static str {
    T::NAME
}

/// Canonical hash of `T`, resolved at compile time.
#[must_use]
pub const fn type_hash<T: TypeName + ?Sized>() -> u64 {
    T::HASH
}

// Only a Const wrapper may name its const form after itself.
const fn const_name_is_derived(const_name: &str, name: &str, is_const: bool) -> bool {
    is_const_name_of(const_name, name) || (is_const && str_eq(const_name, name))
}

// const_name == "const " + name
const fn is_const_name_of(const_name: &str, name: &str) -> bool {
    let c = const_name.as_bytes();
    let n = name.as_bytes();
    let p = CONST_PREFIX.as_bytes();

    if c.len() != p.len() + n.len() || !has_const_prefix(const_name) {
        return false;
    }

    let mut i = 0;
    while i < n.len() {
        if c[p.len() + i] != n[i] {
            return false;
        }
        i += 1;
    }

    true
}

const fn has_const_prefix(s: &str) -> bool {
    let s = s.as_bytes();
    let p = CONST_PREFIX.as_bytes();

    if s.len() < p.len() {
        return false;
    }

    let mut i = 0;
    while i < p.len() {
        if s[i] != p[i] {
            return false;
        }
        i += 1;
    }

    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::fnv1a_64;

    struct Widget;

    impl sealed::Registered for Widget {}
    impl TypeName for Widget {
        const NAME: &'static str = "Widget";
        const CONST_NAME: &'static str = "const Widget";
    }

    struct Prefixed;

    impl sealed::Registered for Prefixed {}
    impl TypeName for Prefixed {
        const NAME: &'static str = "const Prefixed";
        const CONST_NAME: &'static str = "const const Prefixed";
    }

    fn is_const<T: TypeName>() -> bool {
        T::IS_CONST
    }

    #[test]
    fn const_marker_prefixes_the_name() {
        assert_eq!(type_name::<Const<Widget>>(), "const Widget");
        assert_eq!(type_hash::<Const<Widget>>(), fnv1a_64(b"const Widget"));
    }

    #[test]
    fn repeated_const_collapses() {
        assert_eq!(type_name::<Const<Const<Widget>>>(), "const Widget");
    }

    #[test]
    fn prefixed_name_still_gains_a_const_prefix() {
        assert!(!is_const::<Prefixed>());
        assert_eq!(type_name::<Const<Prefixed>>(), "const const Prefixed");
        assert_eq!(type_name::<Const<Const<Prefixed>>>(), "const const Prefixed");
    }

    #[test]
    fn self_named_const_form_is_reserved_for_the_wrapper() {
        assert!(!const_name_is_derived("const Sneaky", "const Sneaky", false));
        assert!(const_name_is_derived("const Sneaky", "const Sneaky", true));
        assert!(const_name_is_derived("const Sneaky", "Sneaky", false));
        assert!(is_const::<Const<Widget>>());
        assert!(!is_const::<Widget>());
    }

    #[test]
    fn default_hash_follows_name() {
        assert_eq!(type_hash::<Widget>(), fnv1a_64(b"Widget"));
    }

    #[test]
    fn const_name_check_accepts_only_the_prefixed_form() {
        assert!(is_const_name_of("const Widget", "Widget"));
        assert!(!is_const_name_of("const  Widget", "Widget"));
        assert!(!is_const_name_of("Widget", "Widget"));
        assert!(!is_const_name_of("mut Widget", "Widget"));
        assert!(!is_const_name_of("const Gadget", "Widget"));
        assert!(is_const_name_of("const ", ""));
    }
}
