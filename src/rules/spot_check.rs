//! Single-file translation spot check.
//!
//! Verifies one locale file: it parses, has no repeated keys, and defines a
//! given list of expected keys.

use std::path::Path;

use crate::{
    core::parsers::json::{LocaleError, load_locale_file},
    paths::ProjectRoot,
};

/// An expected key and the value it was found with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundKey {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotCheckReport {
    pub locale: String,
    pub file_path: String,
    pub total_keys: usize,
    pub duplicates: Vec<String>,
    /// Expected keys present in the file, in the order they were expected.
    pub found: Vec<FoundKey>,
    /// Expected keys absent from the file, in the order they were expected.
    pub missing: Vec<String>,
}

impl SpotCheckReport {
    pub fn expected_count(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    /// All expected keys present and no key repeated.
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty() && self.duplicates.is_empty()
    }
}

/// Locale code implied by a file name (`ar.json` -> `ar`).
pub fn locale_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

pub fn spot_check(
    root: &ProjectRoot,
    file: &Path,
    expected_keys: &[String],
) -> Result<SpotCheckReport, LocaleError> {
    let locale = locale_from_path(file);
    let messages = load_locale_file(root, file, &locale)?;

    let mut found = Vec::new();
    let mut missing = Vec::new();
    for key in expected_keys {
        match messages.value(key) {
            Some(value) => found.push(FoundKey {
                key: key.clone(),
                value: value.to_string(),
            }),
            None => missing.push(key.clone()),
        }
    }

    Ok(SpotCheckReport {
        total_keys: messages.len(),
        duplicates: messages.duplicate_keys(),
        locale: messages.locale,
        file_path: messages.file_path,
        found,
        missing,
    })
}
