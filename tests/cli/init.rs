use anyhow::{Context, Result};
use serde_json::Value;

use crate::{ACCOUNT_MODEL, CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .annopinrc.json"));
    assert!(test.root().join(".annopinrc.json").exists());

    let content = test.read_file(".annopinrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["includes"][0], "app/models");
    assert_eq!(parsed["extensions"][0], "rb");
    assert!(parsed.get("sourceRoot").is_some());
    assert!(parsed.get("typeMapping").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".annopinrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: .annopinrc.json already exists"));
    assert_eq!(test.read_file(".annopinrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.scan_command().output()?;

    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Account"));

    Ok(())
}
