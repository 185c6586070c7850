use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::config::{Config, load_config};

/// Loads the config governing `mod_dir`, falling back to defaults.
pub fn load_config_for(mod_dir: &Path, verbose: bool) -> Result<Config> {
    let start_dir = mod_dir
        .canonicalize()
        .unwrap_or_else(|_| mod_dir.to_path_buf());
    let loaded = load_config(&start_dir)?;

    if verbose {
        match &loaded.path {
            Some(path) => eprintln!("{} {}", "Using config".dimmed(), path.display()),
            None => eprintln!("{}", "No config file found, using defaults".dimmed()),
        }
    }

    Ok(loaded.config)
}
