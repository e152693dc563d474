//! Config subcommands handler

use anyhow::Result;

use seekback::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = config.to_toml()?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
