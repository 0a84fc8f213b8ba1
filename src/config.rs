use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::icons::platform::{DEFAULT_STANDARD_SIZES, PlatformTarget, default_platforms};

pub const CONFIG_FILE_NAME: &str = ".assetctlrc.json";

/// Keys the Arabic spot check expects by default.
pub const DEFAULT_EXPECTED_KEYS: &[&str] = &[
    "players",
    "my_matches",
    "browse_matches",
    "no_matches_yet",
    "join_matches_message",
    "update_your_information",
    "select_city",
    "select_age_group",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_dir")]
    pub translations_dir: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub spot_check: SpotCheckConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotCheckConfig {
    #[serde(default = "default_spot_check_file")]
    pub file: String,
    #[serde(default = "default_expected_keys")]
    pub expected_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconsConfig {
    #[serde(default = "default_icon_source")]
    pub source: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_standard_sizes")]
    pub standard_sizes: Vec<u32>,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<PlatformTarget>,
}

fn default_translations_dir() -> String {
    "assets/translations".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "fr", "ar"].map(String::from).to_vec()
}

fn default_spot_check_file() -> String {
    "assets/translations/ar.json".to_string()
}

fn default_expected_keys() -> Vec<String> {
    DEFAULT_EXPECTED_KEYS.iter().map(|k| k.to_string()).collect()
}

fn default_icon_source() -> String {
    "assets/icons/logo.png".to_string()
}

fn default_assets_dir() -> String {
    "assets/icons".to_string()
}

fn default_standard_sizes() -> Vec<u32> {
    DEFAULT_STANDARD_SIZES.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_dir: default_translations_dir(),
            languages: default_languages(),
            spot_check: SpotCheckConfig::default(),
            icons: IconsConfig::default(),
        }
    }
}

impl Default for SpotCheckConfig {
    fn default() -> Self {
        Self {
            file: default_spot_check_file(),
            expected_keys: default_expected_keys(),
        }
    }
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            source: default_icon_source(),
            assets_dir: default_assets_dir(),
            standard_sizes: default_standard_sizes(),
            platforms: default_platforms(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must list at least one language code");
        }
        for code in &self.languages {
            if code.is_empty() || code.contains(['/', '\\']) || code.contains("..") {
                bail!("Invalid language code in 'languages': \"{}\"", code);
            }
        }

        if self.icons.standard_sizes.contains(&0) {
            bail!("Invalid size 0 in 'icons.standardSizes'");
        }

        for platform in &self.icons.platforms {
            let mut seen = HashSet::new();
            for icon in &platform.icons {
                if icon.size == 0 {
                    bail!(
                        "Invalid size 0 for \"{}\" in platform \"{}\"",
                        icon.path,
                        platform.name
                    );
                }
                if !seen.insert(icon.path.as_str()) {
                    bail!(
                        "Duplicate icon path \"{}\" in platform \"{}\"",
                        icon.path,
                        platform.name
                    );
                }
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
