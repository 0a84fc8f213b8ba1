use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use serde::de::{
    self, Deserialize, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor,
};
use thiserror::Error;

use crate::core::{LocaleMessages, ValueType};
use crate::paths::{PathRejected, ProjectRoot};

/// Why a locale file produced no keys.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error(transparent)]
    PathRejected(#[from] PathRejected),

    #[error("failed to read '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse '{}': {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load one locale file from inside the project root.
///
/// The path is checked against the root before the file is opened.
pub fn load_locale_file(
    root: &ProjectRoot,
    path: impl AsRef<Path>,
    locale: &str,
) -> Result<LocaleMessages, LocaleError> {
    let resolved = root.resolve(path.as_ref())?;

    let content = fs::read_to_string(&resolved).map_err(|source| LocaleError::Unreadable {
        path: resolved.clone(),
        source,
    })?;

    let file_path = root.relative(&resolved).to_string_lossy().to_string();
    parse_locale_str(&content, locale, file_path).map_err(|source| LocaleError::Malformed {
        path: resolved,
        source,
    })
}

/// Parse locale JSON into flattened keys.
///
/// The document is streamed rather than collected into a map first, so a
/// key written twice in the same object shows up twice in
/// [`LocaleMessages::occurrences`].
pub fn parse_locale_str(
    content: &str,
    locale: &str,
    file_path: impl Into<String>,
) -> Result<LocaleMessages, serde_json::Error> {
    let mut messages = LocaleMessages::new(locale, file_path);
    let mut deserializer = serde_json::Deserializer::from_str(content);
    EntrySeed {
        prefix: String::new(),
        root: true,
        messages: &mut messages,
    }
    .deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(messages)
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

struct EntrySeed<'a> {
    prefix: String,
    root: bool,
    messages: &'a mut LocaleMessages,
}

impl EntrySeed<'_> {
    fn ignore_scalar<E: de::Error>(self, unexpected: Unexpected<'_>) -> Result<(), E> {
        if self.root {
            Err(E::invalid_type(unexpected, &self))
        } else {
            Ok(())
        }
    }
}

impl<'de> DeserializeSeed<'de> for EntrySeed<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for EntrySeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root {
            f.write_str("a JSON object at the top level")
        } else {
            f.write_str("a translation value")
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let EntrySeed {
            prefix, messages, ..
        } = self;
        while let Some(key) = map.next_key::<String>()? {
            map.next_value_seed(EntrySeed {
                prefix: join_key(&prefix, &key),
                root: false,
                messages: &mut *messages,
            })?;
        }
        Ok(())
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if self.root {
            return Err(E::invalid_type(Unexpected::Str(v), &self));
        }
        self.messages
            .insert(self.prefix, v.to_string(), ValueType::String);
        Ok(())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if self.root {
            return Err(de::Error::invalid_type(Unexpected::Seq, &self));
        }
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        flatten_array(items, self.prefix, self.messages);
        Ok(())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        self.ignore_scalar(Unexpected::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        self.ignore_scalar(Unexpected::Signed(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        self.ignore_scalar(Unexpected::Unsigned(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        self.ignore_scalar(Unexpected::Float(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        self.ignore_scalar(Unexpected::Unit)
    }
}

/// An array member, buffered until the whole array has been seen.
///
/// Objects keep their entries as a list so a repeated key is still
/// recorded as two occurrences when the member is flattened.
enum Node {
    Str(String),
    Object(Vec<(String, Node)>),
    Array(Vec<Node>),
    Ignored,
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Str(v))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some(entry) = map.next_entry::<String, Node>()? {
            entries.push(entry);
        }
        Ok(Node::Object(entries))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Node::Array(items))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Node, E> {
        Ok(Node::Ignored)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Node, E> {
        Ok(Node::Ignored)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Node, E> {
        Ok(Node::Ignored)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Node, E> {
        Ok(Node::Ignored)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Ignored)
    }
}

fn flatten_node(node: Node, prefix: String, messages: &mut LocaleMessages) {
    match node {
        Node::Object(entries) => {
            for (key, value) in entries {
                flatten_node(value, join_key(&prefix, &key), messages);
            }
        }
        Node::Str(s) => messages.insert(prefix, s, ValueType::String),
        Node::Array(items) => flatten_array(items, prefix, messages),
        Node::Ignored => {}
    }
}

fn flatten_array(items: Vec<Node>, prefix: String, messages: &mut LocaleMessages) {
    if items.is_empty() {
        return;
    }

    // String-only arrays are one message; anything else expands by index.
    if items.iter().all(|item| matches!(item, Node::Str(_))) {
        let parts: Vec<String> = items
            .into_iter()
            .filter_map(|item| match item {
                Node::Str(s) => Some(s),
                _ => None,
            })
            .collect();
        messages.insert(prefix, parts.join(", "), ValueType::StringArray);
    } else {
        for (index, item) in items.into_iter().enumerate() {
            flatten_node(item, join_key(&prefix, &index.to_string()), messages);
        }
    }
}
