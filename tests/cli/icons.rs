use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

fn dimensions(test: &CliTest, path: &str) -> Result<(u32, u32)> {
    Ok(image::image_dimensions(test.root().join(path))?)
}

fn small_config(test: &CliTest) -> Result<()> {
    test.write_file(
        ".assetctlrc.json",
        r#"{
            "icons": {
                "standardSizes": [16, 256],
                "platforms": [
                    { "name": "web", "dir": "web/icons", "icons": [{ "path": "favicon.png", "size": 64 }] }
                ]
            }
        }"#,
    )
}

#[test]
fn test_default_tables_from_square_source() -> Result<()> {
    let test = CliTest::new()?;
    test.write_image("assets/icons/logo.png", 256, 256)?;

    let output = test.icons_command().output()?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Base image: 256x256"));
    assert!(stdout.contains("All icons generated successfully! (39 files)"));

    for size in [16, 32, 64, 128, 256, 512, 1024] {
        let path = format!("assets/icons/logo_{}.png", size);
        assert_eq!(dimensions(&test, &path)?, (size, size), "{}", path);
    }
    assert_eq!(
        dimensions(&test, "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png")?,
        (192, 192)
    );
    assert_eq!(
        dimensions(
            &test,
            "ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-83.5x83.5@2x.png"
        )?,
        (167, 167)
    );
    assert_eq!(dimensions(&test, "web/icons/favicon.png")?, (64, 64));
    assert_eq!(
        dimensions(
            &test,
            "macos/Runner/Assets.xcassets/AppIcon.appiconset/app_icon_1024.png"
        )?,
        (1024, 1024)
    );
    Ok(())
}

#[test]
fn test_non_square_source_is_cropped() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();
    small_config(&test)?;
    test.write_image("assets/icons/logo.png", 800, 600)?;

    assert_cmd_snapshot!(test.icons_command());

    assert_eq!(dimensions(&test, "assets/icons/logo_256.png")?, (256, 256));
    assert_eq!(dimensions(&test, "web/icons/favicon.png")?, (64, 64));
    Ok(())
}

#[test]
fn test_source_override() -> Result<()> {
    let test = CliTest::new()?;
    small_config(&test)?;
    test.write_image("art/brand.png", 128, 128)?;

    let output = test
        .icons_command()
        .args(["--source", "art/brand.png", "--verbose"])
        .output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.contains("web/icons/favicon.png"));
    assert!(test.exists("assets/icons/logo_16.png"));
    Ok(())
}

#[test]
fn test_source_too_small_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();
    small_config(&test)?;
    test.write_image("assets/icons/logo.png", 32, 32)?;

    assert_cmd_snapshot!(test.icons_command());

    assert!(!test.exists("assets/icons/logo_16.png"));
    assert!(!test.exists("web/icons"));
    Ok(())
}

#[test]
fn test_missing_source_fails() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();
    small_config(&test)?;

    assert_cmd_snapshot!(test.icons_command());

    Ok(())
}

#[test]
fn test_source_outside_root_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    let _filters = test.settings().bind_to_scope();
    small_config(&test)?;

    assert_cmd_snapshot!(test.icons_command().args(["--source", "../../etc/passwd"]));

    assert!(!test.exists("assets/icons"));
    Ok(())
}

#[test]
fn test_platform_dir_outside_root_is_a_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".assetctlrc.json",
        r#"{
            "icons": {
                "standardSizes": [16],
                "platforms": [
                    { "name": "evil", "dir": "../outside", "icons": [{ "path": "x.png", "size": 16 }] }
                ]
            }
        }"#,
    )?;
    test.write_image("assets/icons/logo.png", 64, 64)?;

    let output = test.icons_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(test.exists("assets/icons/logo_16.png"));
    assert!(!test.root().join("../outside").exists());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Some icons failed to generate"));
    Ok(())
}
