use proc_macro::TokenStream;

mod type_name;

/// Register the deriving type's canonical name.
///
/// The name defaults to the type's identifier; `#[canonical_name = "..."]`
/// overrides it. Expands to `tyname::type_name!(Ident => "name")`.
#[proc_macro_derive(TypeName, attributes(canonical_name))]
pub fn derive_type_name(input: TokenStream) -> TokenStream {
    type_name::derive_type_name(input.into()).into()
}
