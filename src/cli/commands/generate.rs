use anyhow::Result;

use super::{CommandResult, CommandSummary, helper::load_config_for};
use crate::cli::args::GenerateCommand;
use crate::generate as pipeline;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let common = cmd.common;
    let config = load_config_for(&common.mod_dir, common.verbose)?;

    let summary = pipeline::generate(&common.mod_dir, &config, common.verbose)?;

    Ok(CommandResult {
        summary: CommandSummary::Generate(summary),
    })
}
