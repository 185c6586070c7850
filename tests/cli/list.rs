use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const PILLARS: &str = "\
heritage_akan = {
\tparameters = {
\t\theritage_group_west_african = yes
\t\theritage_family_african = yes
\t}
}
heritage_yoruba = {
\tparameters = {
\t\theritage_group_west_african = yes
\t\theritage_family_african = yes
\t}
}
heritage_kanuri = {
\tparameters = {
\t\theritage_group_central_african = yes # sahelian
\t\theritage_family_african = yes
\t}
}
";

#[test]
fn test_list_all_categories() -> Result<()> {
    let test = CliTest::with_mod_layout()?;
    test.write_pillar("african.txt", PILLARS)?;

    let output = test.list_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    insta::assert_snapshot!(stdout(&output), @r"
    heritage_group: 2 key(s)
      heritage_group_central_african  1
      heritage_group_west_african     2
    heritage_family: 1 key(s)
      heritage_family_african  3
    language_group: 0 key(s)
    language_family: 0 key(s)
    ✓ Found 3 key(s) in 1 pillar file(s)
    ");

    Ok(())
}

#[test]
fn test_list_selected_categories() -> Result<()> {
    let test = CliTest::with_mod_layout()?;
    test.write_pillar("african.txt", PILLARS)?;

    let output = test
        .list_command()
        .args(["--category", "heritage_family"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    insta::assert_snapshot!(stdout(&output), @r"
    heritage_family: 1 key(s)
      heritage_family_african  3
    ✓ Found 1 key(s) in 1 pillar file(s)
    ");

    Ok(())
}

#[test]
fn test_list_writes_nothing() -> Result<()> {
    let test = CliTest::with_mod_layout()?;
    test.write_pillar("african.txt", PILLARS)?;

    let output = test.list_command().output()?;
    assert!(output.status.success());

    assert!(!test.root().join(crate::EFFECT_FILE).exists());
    assert_eq!(
        std::fs::read_dir(test.root().join("localization/english"))?.count(),
        0
    );

    Ok(())
}

#[test]
fn test_list_empty_pillars_dir_warns() -> Result<()> {
    let test = CliTest::with_mod_layout()?;

    let output = test.list_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        stderr(&output),
        "warning: no pillar files found, generated output will be empty\n"
    );

    Ok(())
}

#[test]
fn test_list_unknown_category() -> Result<()> {
    let test = CliTest::with_mod_layout()?;

    let output = test
        .list_command()
        .args(["--category", "religion_family"])
        .output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid value 'religion_family'"));

    Ok(())
}
