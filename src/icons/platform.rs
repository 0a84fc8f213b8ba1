//! Icon size tables for each output target.
//!
//! These are plain configuration values: the defaults below are what
//! `assetctl init` writes, and tests pass synthetic tables instead.

use serde::{Deserialize, Serialize};

/// Sizes generated into the assets directory as `logo_<size>.png`.
pub const DEFAULT_STANDARD_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512, 1024];

/// One output file of a platform target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    /// File path relative to the platform directory.
    pub path: String,
    /// Edge length in pixels.
    pub size: u32,
}

impl IconSpec {
    pub fn new(path: impl Into<String>, size: u32) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// A platform's output directory and the icons it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTarget {
    pub name: String,
    pub dir: String,
    pub icons: Vec<IconSpec>,
}

impl PlatformTarget {
    pub fn new(name: &str, dir: &str, icons: &[(&str, u32)]) -> Self {
        Self {
            name: name.to_string(),
            dir: dir.to_string(),
            icons: icons
                .iter()
                .map(|(path, size)| IconSpec::new(*path, *size))
                .collect(),
        }
    }
}

pub fn standard_icon_name(size: u32) -> String {
    format!("logo_{}.png", size)
}

/// Android launcher icons, one per density bucket.
pub fn android() -> PlatformTarget {
    PlatformTarget::new(
        "android",
        "android/app/src/main/res",
        &[
            ("mipmap-mdpi/ic_launcher.png", 48),
            ("mipmap-hdpi/ic_launcher.png", 72),
            ("mipmap-xhdpi/ic_launcher.png", 96),
            ("mipmap-xxhdpi/ic_launcher.png", 144),
            ("mipmap-xxxhdpi/ic_launcher.png", 192),
        ],
    )
}

/// iOS App Store asset catalog slots.
pub fn ios() -> PlatformTarget {
    PlatformTarget::new(
        "ios",
        "ios/Runner/Assets.xcassets/AppIcon.appiconset",
        &[
            ("Icon-App-20x20@1x.png", 20),
            ("Icon-App-20x20@2x.png", 40),
            ("Icon-App-20x20@3x.png", 60),
            ("Icon-App-29x29@1x.png", 29),
            ("Icon-App-29x29@2x.png", 58),
            ("Icon-App-29x29@3x.png", 87),
            ("Icon-App-40x40@1x.png", 40),
            ("Icon-App-40x40@2x.png", 80),
            ("Icon-App-40x40@3x.png", 120),
            ("Icon-App-60x60@2x.png", 120),
            ("Icon-App-60x60@3x.png", 180),
            ("Icon-App-76x76@1x.png", 76),
            ("Icon-App-76x76@2x.png", 152),
            ("Icon-App-83.5x83.5@2x.png", 167),
            ("Icon-App-1024x1024@1x.png", 1024),
        ],
    )
}

/// Web manifest icons, maskable variants and the favicon.
pub fn web() -> PlatformTarget {
    PlatformTarget::new(
        "web",
        "web/icons",
        &[
            ("Icon-192.png", 192),
            ("Icon-512.png", 512),
            ("Icon-maskable-192.png", 192),
            ("Icon-maskable-512.png", 512),
            ("favicon.png", 64),
        ],
    )
}

/// Desktop (macOS) application icon set.
pub fn macos() -> PlatformTarget {
    PlatformTarget::new(
        "macos",
        "macos/Runner/Assets.xcassets/AppIcon.appiconset",
        &[
            ("app_icon_16.png", 16),
            ("app_icon_32.png", 32),
            ("app_icon_64.png", 64),
            ("app_icon_128.png", 128),
            ("app_icon_256.png", 256),
            ("app_icon_512.png", 512),
            ("app_icon_1024.png", 1024),
        ],
    )
}

pub fn default_platforms() -> Vec<PlatformTarget> {
    vec![android(), ios(), web(), macos()]
}
