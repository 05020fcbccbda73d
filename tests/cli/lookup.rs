use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{ACCOUNT_MODEL, CliTest, stderr, stdout};

#[test]
fn test_lookup_single_attribute() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.lookup_command().args(["Account", "balance"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Account#balance: Decimal\n  @return [Decimal]\n  --> ./app/models/account.rb:7\n"
    );

    Ok(())
}

#[test]
fn test_lookup_all_attributes() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.lookup_command().arg("Account").output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Account#id: Int"));
    assert!(out.contains("Account#name: String"));
    assert!(out.contains("Account#balance: Decimal"));
    assert!(out.find("Account#id").unwrap() < out.find("Account#balance").unwrap());

    Ok(())
}

#[test]
fn test_lookup_unknown_model() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.lookup_command().arg("Ghost").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("error: no annotated model named `Ghost`"));

    Ok(())
}

#[test]
fn test_lookup_unknown_attribute() -> Result<()> {
    let test = CliTest::with_file("app/models/account.rb", ACCOUNT_MODEL)?;

    let output = test.lookup_command().args(["Account", "nickname"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("`Account` has no annotated attribute `nickname`"));

    Ok(())
}

#[test]
fn test_lookup_discarded_model_is_unknown() -> Result<()> {
    // Class line is not a model declaration, so nothing is indexed
    let test = CliTest::with_file(
        "app/models/account.rb",
        "# id integer\nclass Account < Struct\nend\n",
    )?;

    let output = test.lookup_command().arg("Account").output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}
