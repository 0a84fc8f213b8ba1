use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

fn write_translations(test: &CliTest, files: &[(&str, &str)]) -> Result<()> {
    for (locale, content) in files {
        test.write_file(&format!("assets/translations/{}.json", locale), content)?;
    }
    Ok(())
}

#[test]
fn test_consistent_keys() -> Result<()> {
    let test = CliTest::new()?;
    write_translations(
        &test,
        &[
            ("en", r#"{"players": "Players", "select_city": "Select city"}"#),
            ("fr", r#"{"players": "Joueurs", "select_city": "Choisir la ville"}"#),
            ("ar", r#"{"players": "اللاعبون", "select_city": "اختر المدينة"}"#),
        ],
    )?;

    assert_cmd_snapshot!(test.audit_command());

    Ok(())
}

#[test]
fn test_missing_keys() -> Result<()> {
    let test = CliTest::new()?;
    write_translations(
        &test,
        &[
            ("en", r#"{"players": "Players", "my_matches": "My matches", "select_city": "Select city"}"#),
            ("fr", r#"{"players": "Joueurs", "my_matches": "Mes matchs", "select_city": "Ville"}"#),
            ("ar", r#"{"players": "اللاعبون"}"#),
        ],
    )?;

    assert_cmd_snapshot!(test.audit_command());

    Ok(())
}

#[test]
fn test_deleted_language_file() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();
    write_translations(
        &test,
        &[
            ("en", r#"{"players": "Players"}"#),
            ("fr", r#"{"players": "Joueurs"}"#),
        ],
    )?;

    assert_cmd_snapshot!(test.audit_command());

    Ok(())
}

#[test]
fn test_no_translation_files() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.audit_command());

    Ok(())
}

#[test]
fn test_rerun_is_identical() -> Result<()> {
    let test = CliTest::new()?;
    write_translations(
        &test,
        &[
            ("en", r#"{"a": "A", "b": "B"}"#),
            ("fr", r#"{"a": "A"}"#),
            ("ar", r#"{"b": "B"}"#),
        ],
    )?;

    let first = test.audit_command().output()?;
    let second = test.audit_command().output()?;

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    Ok(())
}

#[test]
fn test_languages_and_dir_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/l10n/en.json", r#"{"hello": "Hello"}"#)?;
    test.write_file("lib/l10n/es.json", r#"{"hello": "Hola"}"#)?;

    assert_cmd_snapshot!(test.audit_command().args([
        "--translations-dir",
        "lib/l10n",
        "--languages",
        "en,es"
    ]));

    Ok(())
}

#[test]
fn test_config_file_languages() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".assetctlrc.json",
        r#"{ "translationsDir": "i18n", "languages": ["en", "de"] }"#,
    )?;
    test.write_file("i18n/en.json", r#"{"a": "A", "b": "B"}"#)?;
    test.write_file("i18n/de.json", r#"{"a": "A"}"#)?;

    assert_cmd_snapshot!(test.audit_command());

    Ok(())
}

#[test]
fn test_traversal_dir_is_rejected_not_fatal() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();
    test.write_file("assets/translations/en.json", r#"{"a": "A"}"#)?;

    assert_cmd_snapshot!(test.audit_command().args(["--translations-dir", "../../etc"]));

    Ok(())
}

#[test]
fn test_path_like_language_is_a_config_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.audit_command().args(["--languages", "../../etc/passwd"]));

    Ok(())
}
