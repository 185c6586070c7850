use anyhow::Result;

use super::{CommandResult, CommandSummary, ListSummary, helper::load_config_for};
use crate::category::Category;
use crate::cli::args::ListCommand;
use crate::generate::collect;

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let common = cmd.common;
    let config = load_config_for(&common.mod_dir, common.verbose)?;
    let categories = selected_categories(&cmd.category);

    let collected = collect(&common.mod_dir, &config, &categories, common.verbose)?;

    Ok(CommandResult {
        summary: CommandSummary::List(ListSummary { collected }),
    })
}

/// Requested categories in request order without repeats, or all of them.
fn selected_categories(requested: &[Category]) -> Vec<Category> {
    if requested.is_empty() {
        return Category::ALL.to_vec();
    }

    let mut selected = Vec::with_capacity(requested.len());
    for &category in requested {
        if !selected.contains(&category) {
            selected.push(category);
        }
    }
    selected
}
