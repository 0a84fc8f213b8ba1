//! Locale file model and parsing.

mod messages;
pub mod parsers;

pub use messages::{LocaleMessages, MessageEntry, ValueType};
