use crate::{config::Registration, error::ConfigError};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

/// Emit the registration block and hash constants for validated entries.
pub fn generate_tokens(registrations: &[Registration]) -> Result<TokenStream, ConfigError> {
    if registrations.is_empty() {
        return Ok(quote!());
    }

    let mut entries = Vec::with_capacity(registrations.len());
    let mut consts = Vec::with_capacity(registrations.len());

    for reg in registrations {
        let path: syn::Path = syn::parse_str(&reg.path).map_err(|err| ConfigError::InvalidPath {
            path: reg.path.clone(),
            message: err.to_string(),
        })?;
        let name = &reg.name;
        let ident = format_ident!("{}", reg.const_ident);
        let hash = Literal::u64_suffixed(reg.hash);
        let doc = format!("FNV-1a of `{name}`.");

        entries.push(quote!(#path => #name));
        consts.push(quote! {
            #[doc = #doc]
            pub const #ident: u64 = #hash;
        });
    }

    Ok(quote! {
        ::tyname::type_name!(#(#entries);*);

        /// Canonical hashes of the types registered from `tyname.toml`.
        pub mod type_hashes {
            #(#consts)*
        }
    })
}

///
/// TESTS
///
