use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Everything that stops a `tyname.toml` from becoming generated code.
/// Duplicate registrations surface here as build-time diagnostics.
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid tyname config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("`{path}` is not a valid type path: {message}")]
    InvalidPath { path: String, message: String },

    #[error("`{path}` has generic arguments; register a concrete type alias instead")]
    GenericPath { path: String },

    #[error("`{path}` has an empty name")]
    EmptyName { path: String },

    #[error("`{path}` has a name containing control characters: {name:?}")]
    InvalidName { path: String, name: String },

    #[error("`{path}` is registered more than once")]
    DuplicatePath { path: String },

    #[error("name `{name}` is used by both `{first}` and `{second}`")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    #[error("hash constant `{ident}` is generated for both `{first}` and `{second}`")]
    DuplicateConstant {
        ident: String,
        first: String,
        second: String,
    },

    #[error("`{name}` does not produce a usable constant identifier")]
    InvalidConstant { name: String },
}
