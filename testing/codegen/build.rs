fn main() -> Result<(), Box<dyn std::error::Error>> {
    tyname_build::build!("tyname.toml");

    Ok(())
}
