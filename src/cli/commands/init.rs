use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::args::InitCommand;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = cmd.mod_dir.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
        true
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            config_path,
            created,
        }),
    })
}
