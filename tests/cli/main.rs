use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod list;

const BIN_NAME: &str = "pillars";

pub const PILLARS_DIR: &str = "common/culture/pillars";
pub const EFFECT_FILE: &str = "common/scripted_effects/ccu_scripted_effects.txt";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A mod directory with the pillar, scripted effect and english
    /// localization directories in place.
    pub fn with_mod_layout() -> Result<Self> {
        let test = Self::new()?;
        test.create_dir(PILLARS_DIR)?;
        test.create_dir("common/scripted_effects")?;
        test.create_dir("localization/english")?;
        Ok(test)
    }

    pub fn create_dir(&self, path: &str) -> Result<()> {
        let dir_path = self.project_dir.join(path);
        fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create directory:{}", dir_path.display()))
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn write_pillar(&self, name: &str, content: &str) -> Result<()> {
        self.write_file(&format!("{PILLARS_DIR}/{name}"), content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn list_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("list");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Reads a generated file without its byte order mark.
    pub fn read_generated(&self, path: &str) -> Result<String> {
        let content = self.read_file(path)?;
        let stripped = content
            .strip_prefix('\u{feff}')
            .with_context(|| format!("{path} should start with a byte order mark"))?;
        Ok(stripped.to_string())
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
    assert!(stdout(&output).contains("generate"));

    Ok(())
}
