use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["pillarsDir"], "common/culture/pillars");
    assert_eq!(
        parsed["scriptedEffectsFile"],
        "common/scripted_effects/ccu_scripted_effects.txt"
    );
    assert_eq!(parsed["effectName"], "ccu_initialize_culture");
    assert_eq!(parsed["language"], "english");
    assert!(parsed["ignores"].as_array().is_some_and(Vec::is_empty));

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created ./.pillarsrc.json\n");
    let content = test.read_file(".pillarsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".pillarsrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: ./.pillarsrc.json already exists\n");
    assert_eq!(test.read_file(".pillarsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_mod_layout()?;

    test.command().arg("init").output()?;
    test.write_pillar("akan.txt", "heritage_group_west_african = yes\n")?;

    let output = test.generate_command().output()?;
    assert!(
        output.status.success(),
        "Generate should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
