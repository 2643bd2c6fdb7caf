//! Configuration command.

use std::path::Path;

use crate::config::{self, Config};

/// Print the effective config, or write it out with `--init`
pub fn cmd_config(config: &Config, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    if init {
        let written = match path {
            Some(path) => {
                config::save_to(config, path)?;
                path.to_path_buf()
            }
            None => config::save(config)?,
        };
        println!("✓ Wrote {}", written.display());
        return Ok(());
    }

    match path.map(Path::to_path_buf).or_else(config::config_path) {
        Some(p) => println!("# {}", p.display()),
        None => println!("# no config directory on this platform"),
    }
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
