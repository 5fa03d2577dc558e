use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, Error, Expr, ExprLit, Lit, LitStr, Meta};

const ATTR: &str = "canonical_name";

// derive_type_name
pub fn derive_type_name(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, Error> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "TypeName can only be derived for types without generic parameters",
        ));
    }

    let name = match name_override(&input.attrs)? {
        Some(lit) => lit,
        None => LitStr::new(&ident.to_string(), ident.span()),
    };

    Ok(quote! {
        ::tyname::type_name!(#ident => #name);
    })
}

// name_override
// reads `#[canonical_name = "..."]`, at most once
fn name_override(attrs: &[Attribute]) -> Result<Option<LitStr>, Error> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        let Meta::NameValue(meta) = &attr.meta else {
            return Err(Error::new_spanned(
                attr,
                "expected `#[canonical_name = \"...\"]`",
            ));
        };

        let Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) = &meta.value
        else {
            return Err(Error::new_spanned(
                &meta.value,
                "canonical_name must be a string literal",
            ));
        };

        if lit.value().is_empty() {
            return Err(Error::new_spanned(lit, "canonical_name must not be empty"));
        }
        if found.is_some() {
            return Err(Error::new_spanned(attr, "duplicate `canonical_name` attribute"));
        }

        found = Some(lit.clone());
    }

    Ok(found)
}

///
/// TESTS
///
