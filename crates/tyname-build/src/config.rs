use crate::error::ConfigError;
use convert_case::{Case, Casing};
use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};
use syn::PathArguments;
use tyname_core::fnv1a_64_str;

///
/// Config
///
/// Contents of a `tyname.toml` file.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub types: Vec<TypeConfig>,
}

///
/// TypeConfig
///
/// One `[[types]]` table. `name` defaults to the last path segment.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
}

///
/// Registration
///
/// A validated entry, ready for code generation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    pub path: String,
    pub name: String,
    pub hash: u64,
    pub const_ident: String,
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Validate every entry and resolve names, hashes and constant idents.
    pub fn registrations(&self) -> Result<Vec<Registration>, ConfigError> {
        let mut by_path: HashSet<String> = HashSet::new();
        let mut by_name: HashMap<String, String> = HashMap::new();
        let mut by_ident: HashMap<String, String> = HashMap::new();
        let mut out = Vec::with_capacity(self.types.len());

        for ty in &self.types {
            let reg = ty.registration()?;

            if !by_path.insert(reg.path.clone()) {
                return Err(ConfigError::DuplicatePath { path: reg.path });
            }
            if let Some(first) = by_name.insert(reg.name.clone(), reg.path.clone()) {
                return Err(ConfigError::DuplicateName {
                    name: reg.name,
                    first,
                    second: reg.path,
                });
            }
            if let Some(first) = by_ident.insert(reg.const_ident.clone(), reg.path.clone()) {
                return Err(ConfigError::DuplicateConstant {
                    ident: reg.const_ident,
                    first,
                    second: reg.path,
                });
            }

            out.push(reg);
        }

        Ok(out)
    }
}

impl TypeConfig {
    fn registration(&self) -> Result<Registration, ConfigError> {
        let parsed: syn::Path =
            syn::parse_str(&self.path).map_err(|err| ConfigError::InvalidPath {
                path: self.path.clone(),
                message: err.to_string(),
            })?;

        if parsed
            .segments
            .iter()
            .any(|seg| !matches!(seg.arguments, PathArguments::None))
        {
            return Err(ConfigError::GenericPath {
                path: self.path.clone(),
            });
        }

        // normalized so `a :: B` and `a::B` count as the same path
        let path = parsed
            .segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::");
        let path = if parsed.leading_colon.is_some() {
            format!("::{path}")
        } else {
            path
        };

        let name = match &self.name {
            Some(name) => name.clone(),
            None => parsed
                .segments
                .last()
                .map(|seg| seg.ident.to_string())
                .unwrap_or_default(),
        };

        if name.is_empty() {
            return Err(ConfigError::EmptyName { path });
        }
        if name.chars().any(char::is_control) {
            return Err(ConfigError::InvalidName { path, name });
        }

        let const_ident = const_ident(&name)?;

        Ok(Registration {
            hash: fnv1a_64_str(&name),
            path,
            name,
            const_ident,
        })
    }
}

// const_ident
// UPPER_SNAKE identifier for the generated hash constant
fn const_ident(name: &str) -> Result<String, ConfigError> {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let ident = cleaned.to_case(Case::UpperSnake);

    let ident = match ident.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{ident}"),
        Some(_) => ident,
        None => {
            return Err(ConfigError::InvalidConstant {
                name: name.to_string(),
            });
        }
    };

    if syn::parse_str::<syn::Ident>(&ident).is_err() {
        return Err(ConfigError::InvalidConstant {
            name: name.to_string(),
        });
    }

    Ok(ident)
}

///
/// TESTS
///
