use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

/// Value type for translation entries.
///
/// Locale files hold either a plain string or an array of strings. Arrays
/// of strings are kept as one key whose value is the joined parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueType {
    /// A simple string value: `"submit": "Submit"`
    String,
    /// A string array value: `"steps": ["Sign up", "Play"]`
    StringArray,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::StringArray => write!(f, "array"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub value: String,
    pub value_type: ValueType,
}

/// The flattened key/value mapping of one language file.
#[derive(Debug, Clone, Default)]
pub struct LocaleMessages {
    /// Locale code (e.g., "en", "ar").
    pub locale: String,
    /// File path of the locale file.
    pub file_path: String,
    /// Entries keyed by flattened key. A repeated key keeps its last value.
    pub entries: BTreeMap<String, MessageEntry>,
    /// Every key in document order, repeats included.
    pub occurrences: Vec<String>,
}

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: BTreeMap::new(),
            occurrences: Vec::new(),
        }
    }

    /// Record one key occurrence. Later occurrences overwrite the value.
    pub fn insert(&mut self, key: String, value: String, value_type: ValueType) {
        self.occurrences.push(key.clone());
        self.entries.insert(key, MessageEntry { value, value_type });
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that occur more than once in the file, sorted.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for key in &self.occurrences {
            *counts.entry(key.as_str()).or_default() += 1;
        }
        let mut duplicates: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key.to_string())
            .collect();
        duplicates.sort();
        duplicates
    }
}
