use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{ACCOUNT_MODEL, CliTest, stderr, stdout};

#[test]
fn test_scan_lists_annotated_models() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;
    test.write_file(
        "app/models/widget.rb",
        "# id integer\n# weird_col vector\nclass Widget < ActiveRecord::Base\nend\n",
    )?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(out.contains("Account\n"));
    assert!(out.contains("  id       Int      ./app/models/account.rb:5\n"));
    assert!(out.contains("  name     String   ./app/models/account.rb:6\n"));
    assert!(out.contains("  balance  Decimal  ./app/models/account.rb:7\n"));
    assert!(out.contains("Widget\n"));
    assert!(!out.contains("weird_col"));
    assert!(out.contains("Indexed 4 attributes on 2 models from 2 files"));

    Ok(())
}

#[test]
fn test_scan_json_matches_sink_records() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.scan_command().args(["--format", "json"]).output()?;
    assert!(output.status.success());

    let records: Value = serde_json::from_str(&stdout(&output))?;
    let account = &records[0];
    assert_eq!(account["entityName"], "Account");

    let names: Vec<_> = account["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["id", "name", "balance"]);

    let location = &account["attributes"][0]["location"];
    assert_eq!(location["sourceId"], "./app/models/account.rb");
    assert_eq!(location["startLine"], 4);
    assert_eq!(location["endLine"], 4);
    assert_eq!(location["startCol"], 0);
    assert_eq!(location["endCol"], "# id      integer".len());

    Ok(())
}

#[test]
fn test_scan_discards_unresolved_models() -> Result<()> {
    let test = CliTest::with_file(
        "app/models/concerns/auditable.rb",
        "# id integer\nmodule Auditable\nend\n",
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Scanned 1 file - no annotated models found"));
    assert!(stderr(&output).contains("unable to find model name in line 1: module Auditable"));

    Ok(())
}

#[test]
fn test_scan_verbose_logs_progress() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.scan_command().arg("-v").output()?;
    let err = stderr(&output);

    assert!(output.status.success());
    assert!(err.contains("loading from ./app/models/account.rb"));
    assert!(err.contains("parsed name: balance type: decimal"));
    assert!(err.contains("adding 3 attributes as pins"));

    Ok(())
}

#[test]
fn test_scan_reports_unreadable_files() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;
    // Not valid UTF-8
    fs::write(
        test.root().join("app/models/binary.rb"),
        [0xff, 0xfe, 0x00, 0x01],
    )?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("1 file(s) could not be read"));
    // The readable model is still indexed
    assert!(stdout(&output).contains("Account"));

    Ok(())
}

#[test]
fn test_scan_respects_config_ignores() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;
    test.write_file(
        "app/models/legacy/old_account.rb",
        "# id integer\nclass OldAccount < ActiveRecord::Base\n",
    )?;
    test.write_file(
        ".annopinrc.json",
        r#"{ "ignores": ["app/models/legacy"] }"#,
    )?;

    let output = test.scan_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Account"));
    assert!(!out.contains("OldAccount"));

    Ok(())
}

#[test]
fn test_scan_with_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("backend/app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test
        .scan_command()
        .args(["--source-root", "backend"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("backend/app/models/account.rb:5"));

    Ok(())
}

#[test]
fn test_scan_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".annopinrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Invalid glob pattern in 'ignores'"));

    Ok(())
}
