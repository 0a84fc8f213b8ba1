use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const COMPLETE_AR: &str = r#"{
    "players": "اللاعبون",
    "my_matches": "مبارياتي",
    "browse_matches": "تصفح المباريات",
    "no_matches_yet": "لا توجد مباريات بعد",
    "join_matches_message": "انضم إلى المباريات",
    "update_your_information": "حدّث معلوماتك",
    "select_city": "اختر المدينة",
    "select_age_group": "اختر الفئة العمرية"
}"#;

#[test]
fn test_complete_file_is_ready() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/translations/ar.json", COMPLETE_AR)?;

    assert_cmd_snapshot!(test.spot_check_command());

    Ok(())
}

#[test]
fn test_duplicate_key_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "l10n/ar.json",
        r#"{"players": "A", "players": "B", "select_city": "C"}"#,
    )?;

    assert_cmd_snapshot!(test.spot_check_command().args([
        "--file",
        "l10n/ar.json",
        "--expect",
        "players",
        "--expect",
        "select_city"
    ]));

    Ok(())
}

#[test]
fn test_missing_expected_keys_still_exit_zero() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/translations/ar.json", r#"{"players": "اللاعبون"}"#)?;

    assert_cmd_snapshot!(test.spot_check_command());

    Ok(())
}

#[test]
fn test_missing_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.spot_check_command());

    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/translations/ar.json", r#"{"players": "#)?;

    let output = test.spot_check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to spot-check"));
    assert!(stderr.contains("failed to parse"));
    Ok(())
}

#[test]
fn test_file_outside_root_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.spot_check_command().args(["--file", "../../etc/passwd"]));

    Ok(())
}
