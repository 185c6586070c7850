use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::generate::{Collected, GenerateSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    List(ListSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ListSummary {
    pub collected: Collected,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
    /// False if a config file already existed and was left untouched.
    pub created: bool,
}

/// Result of running pillars commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(InitSummary { created: false, .. }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
