//! Translation key parity rule.
//!
//! Loads one locale file per configured language, builds the union of all
//! keys and reports, per language, the keys it lacks. A file that cannot be
//! loaded counts as an empty language rather than stopping the audit.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        LocaleMessages,
        parsers::json::{LocaleError, load_locale_file},
    },
    paths::ProjectRoot,
};

/// Audit outcome for one language.
#[derive(Debug)]
pub struct LanguageAudit {
    pub locale: String,
    /// Locale file path as requested (relative to the project root).
    pub file_path: PathBuf,
    pub key_count: usize,
    /// Keys present in some other language but not in this one, sorted.
    pub missing: Vec<String>,
    pub load_error: Option<LocaleError>,
}

#[derive(Debug)]
pub struct AuditReport {
    /// Size of the key union across every language.
    pub total_keys: usize,
    /// One entry per configured language, in configured order.
    pub languages: Vec<LanguageAudit>,
}

impl AuditReport {
    /// True when every file loaded and no language misses any key.
    pub fn is_consistent(&self) -> bool {
        self.languages
            .iter()
            .all(|l| l.missing.is_empty() && l.load_error.is_none())
    }

    pub fn languages_with_missing(&self) -> impl Iterator<Item = &LanguageAudit> {
        self.languages.iter().filter(|l| !l.missing.is_empty())
    }

    pub fn load_failures(&self) -> impl Iterator<Item = &LanguageAudit> {
        self.languages.iter().filter(|l| l.load_error.is_some())
    }
}

/// Path of the locale file for `locale` under `translations_dir`.
pub fn locale_file_path(translations_dir: &Path, locale: &str) -> PathBuf {
    translations_dir.join(format!("{}.json", locale))
}

/// Load every language and compare key sets.
pub fn audit_translations(
    root: &ProjectRoot,
    translations_dir: &Path,
    languages: &[String],
) -> AuditReport {
    let loaded: Vec<(PathBuf, Result<LocaleMessages, LocaleError>)> = languages
        .iter()
        .map(|locale| {
            let path = locale_file_path(translations_dir, locale);
            let result = load_locale_file(root, &path, locale);
            (path, result)
        })
        .collect();

    let union = key_union(loaded.iter().filter_map(|(_, r)| r.as_ref().ok()));

    let languages = languages
        .iter()
        .zip(loaded)
        .map(|(locale, (file_path, result))| {
            let (key_count, missing, load_error) = match result {
                Ok(messages) => (messages.len(), missing_keys(&union, &messages), None),
                Err(err) => (0, union.iter().cloned().collect(), Some(err)),
            };
            LanguageAudit {
                locale: locale.clone(),
                file_path,
                key_count,
                missing,
                load_error,
            }
        })
        .collect();

    AuditReport {
        total_keys: union.len(),
        languages,
    }
}

/// All distinct keys appearing in at least one language.
pub fn key_union<'a>(all: impl IntoIterator<Item = &'a LocaleMessages>) -> BTreeSet<String> {
    all.into_iter()
        .flat_map(|messages| messages.keys().cloned())
        .collect()
}

/// Keys of `union` that `messages` lacks, in sorted order.
pub fn missing_keys(union: &BTreeSet<String>, messages: &LocaleMessages) -> Vec<String> {
    union
        .iter()
        .filter(|key| !messages.contains_key(key))
        .cloned()
        .collect()
}
