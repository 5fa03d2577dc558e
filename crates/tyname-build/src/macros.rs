//! Build-script helper that turns a `tyname.toml` into registrations.
//!
//! Include the result from the crate with `tyname::include_type_names!()`.
#[macro_export]
macro_rules! build {
    ($config:expr) => {
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $config);

        // Get the output directory set by Cargo
        let out_dir = ::std::env::var("OUT_DIR").expect("OUT_DIR not set");

        //
        // REGISTRATIONS
        //

        $crate::write_type_names($config, &out_dir)?;
    };
}
