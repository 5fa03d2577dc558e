// type_name
/// Register canonical names for one or more types.
///
/// `type_name!(Widget)` and `type_name!(path::to::Widget)` name the type
/// after its source text as written, and
/// `type_name!(path::to::Widget => "Widget")` names it with an explicit
/// literal. Both forms implement `TypeName`
/// (deriving `Const<T>`'s name and the hash from the same literal) and
/// record the type in the load-time registry.
///
/// A type can be registered once; a second registration is a conflicting
/// implementation error.
#[macro_export]
macro_rules! type_name {
    (@impl $ty:ty, [$($name:tt)+]) => {
        impl $crate::traits::sealed::Registered for $ty {}

        impl $crate::TypeName for $ty {
            const NAME: &'static str = $($name)+;
            const CONST_NAME: &'static str = concat!("const ", $($name)+);
            const HASH: u64 = $crate::hash::fnv1a_64_str($($name)+);
        }

        #[cfg(not(target_arch = "wasm32"))]
        const _: () = {
            #[$crate::__reexports::ctor::ctor(unsafe, anonymous, crate_path = $crate::__reexports::ctor)]
            fn __ctor() {
                $crate::registry::register::<$ty>();
            }
        };
    };
    ($( $ty:ty => $name:literal );+ $(;)?) => {
        $(
            $crate::type_name!(@impl $ty, [$name]);
        )+
    };
    ($( $ty:path ),+ $(,)?) => {
        $(
            $crate::type_name!(@impl $ty, [stringify!($ty)]);
        )+
    };
}

// include_type_names
/// Include the registrations generated by `tyname_build::build!` (placed in
/// `OUT_DIR/type_names.rs`).
#[macro_export]
macro_rules! include_type_names {
    () => {
        include!(concat!(env!("OUT_DIR"), "/type_names.rs"));
    };
}
