//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Write the scripted effect and localization files
//! - `list`: Print the pillar keys found, without writing anything
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::category::Category;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by the scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Root directory of the mod
    #[arg(env = "PILLARS_MOD_DIR", default_value = ".")]
    pub mod_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Categories to list (default: all)
    /// Can be specified multiple times: --category heritage_group --category language_group
    #[arg(long, value_enum)]
    pub category: Vec<Category>,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Root directory of the mod
    #[arg(env = "PILLARS_MOD_DIR", default_value = ".")]
    pub mod_dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the scripted effect and localization files from the pillar files
    Generate(GenerateCommand),
    /// List the pillar keys found in each category without writing anything
    List(ListCommand),
    /// Initialize a new .pillarsrc.json configuration file
    Init(InitCommand),
}
