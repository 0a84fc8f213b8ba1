use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    let content = test.read_file(".assetctlrc.json")?;
    let json: Value = serde_json::from_str(&content)?;
    assert_eq!(json["translationsDir"], "assets/translations");
    assert_eq!(json["languages"], serde_json::json!(["en", "fr", "ar"]));
    assert_eq!(json["icons"]["platforms"].as_array().map(Vec::len), Some(4));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".assetctlrc.json", r#"{ "languages": ["en"] }"#)?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert_eq!(test.read_file(".assetctlrc.json")?, r#"{ "languages": ["en"] }"#);
    Ok(())
}

#[test]
fn test_written_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("assets/translations/en.json", r#"{"a": "A"}"#)?;
    test.write_file("assets/translations/fr.json", r#"{"a": "A"}"#)?;
    test.write_file("assets/translations/ar.json", r#"{"a": "A"}"#)?;

    let output = test.audit_command().output()?;

    assert!(
        output.status.success(),
        "audit should accept the generated config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}
