//! Build-time code generation for tyname registrations.
//!
//! A `tyname.toml` lists types and their canonical names; `build!` turns
//! it into `type_name!` invocations plus a `type_hashes` module of
//! precomputed constants. Duplicate registrations fail the build script
//! with a [`ConfigError`] instead of surfacing as a coherence error.

mod codegen;
mod config;
mod error;
mod macros;

pub use codegen::generate_tokens;
pub use config::{Config, Registration, TypeConfig};
pub use error::ConfigError;

use std::{fs, path::Path};

/// File name written into `OUT_DIR` by [`write_type_names`].
pub const OUTPUT_FILE: &str = "type_names.rs";

/// Generate the registration source for a parsed config.
pub fn generate(config: &Config) -> Result<String, ConfigError> {
    let registrations = config.registrations()?;

    Ok(generate_tokens(&registrations)?.to_string())
}

/// Read `config_path`, generate code and write it to `out_dir/type_names.rs`.
pub fn write_type_names(
    config_path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<(), ConfigError> {
    let config = Config::from_path(config_path)?;
    let output = generate(&config)?;

    let target = out_dir.as_ref().join(OUTPUT_FILE);
    fs::write(&target, output).map_err(|source| ConfigError::Write {
        path: target,
        source,
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    fn scratch_dir(label: &str) -> std::path::PathBuf {
        let dir = env::temp_dir().join(format!("tyname-build-{label}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn writes_generated_file_into_out_dir() {
        let dir = scratch_dir("write");
        let config = dir.join("tyname.toml");
        fs::write(&config, "[[types]]\npath = \"crate::Widget\"\n").unwrap();

        write_type_names(&config, &dir).unwrap();

        let written = fs::read_to_string(dir.join(OUTPUT_FILE)).unwrap();
        assert!(written.contains("\"Widget\""), "{written}");
        assert!(written.contains("type_hashes"), "{written}");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_config_is_a_read_error() {
        let dir = scratch_dir("missing");
        let err = write_type_names(dir.join("absent.toml"), &dir).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }), "{err}");
        assert!(err.to_string().starts_with("failed to read"), "{err}");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn generate_rejects_duplicates_before_emitting() {
        let config = Config::from_toml_str(
            "[[types]]\npath = \"crate::Widget\"\n[[types]]\npath = \"crate::Widget\"\n",
        )
        .unwrap();

        assert!(matches!(
            generate(&config),
            Err(ConfigError::DuplicatePath { .. })
        ));
    }
}
