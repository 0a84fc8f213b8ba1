//! File parsers for locale message files.
//!
//! - `json`: streaming JSON locale parser (flattens nested keys, keeps repeats)

pub mod json;
