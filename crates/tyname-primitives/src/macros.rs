///
/// Primitive Registry
///
/// Single source of truth for the built-in canonical names.
///

// NOTE: `hash_source` is kept separate from `name` on purpose.
// The char hash MUST be computed from the literal "char" and never from
// whatever the name column resolves to.
#[macro_export]
macro_rules! primitive_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Bool, bool, name = "bool", hash_source = "bool"),
            (Char, char, name = "char", hash_source = "char"),
            (Int8, i8, name = "int8_t", hash_source = "int8_t"),
            (Uint8, u8, name = "uchar", hash_source = "uchar"),
            (Int16, i16, name = "short", hash_source = "short"),
            (Uint16, u16, name = "ushort", hash_source = "ushort"),
            (Int32, i32, name = "int", hash_source = "int"),
            (Uint32, u32, name = "uint", hash_source = "uint"),
            (Float32, f32, name = "float", hash_source = "float"),
            (Float64, f64, name = "double", hash_source = "double"),
            (Text, ::std::string::String, name = "string", hash_source = "string"),
        }
    };
}

#[macro_export]
macro_rules! primitive_kind_registry {
    ($macro:ident) => {
        $crate::primitive_kind_registry_entries! { $macro }
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::primitive_kind_registry_entries! { $macro, @args $($args)+ }
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($prim:ident, $ty:ty, name = $name:literal, hash_source = $hash_source:literal) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::PrimitiveKind::$prim => $crate::PrimitiveMetadata {
                    name: $name,
                    hash_source: $hash_source,
                    rust_type: stringify!($ty),
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($prim:ident, $ty:ty, name = $name:literal, hash_source = $hash_source:literal) ),* $(,)? ) => {
        [ $( $crate::PrimitiveKind::$prim ),* ]
    };
}

macro_rules! kind_from_name_registry {
    ( @args $name_in:expr; @entries $( ($prim:ident, $ty:ty, name = $name:literal, hash_source = $hash_source:literal) ),* $(,)? ) => {
        match $name_in {
            $(
                $name => Some($crate::PrimitiveKind::$prim),
            )*
            _ => None,
        }
    };
}
