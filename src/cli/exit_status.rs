use std::process::ExitCode;

/// How a pillars run ended, as reported to the shell.
///
/// Generation either writes every file or aborts, so there is no "partial"
/// status: any I/O or config problem is an `Error`. `Failure` only covers
/// `init` finding a config it refuses to overwrite.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Files were generated, keys were listed, or a config was created.
    Success,
    /// `init` left an existing `.pillarsrc.json` untouched.
    Failure,
    /// A pillar file, output file or config could not be read or written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
