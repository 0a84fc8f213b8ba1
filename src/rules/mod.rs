//! Translation checks built on the locale parser.
//!
//! - `key_parity`: key union across languages and per-language gaps
//! - `spot_check`: duplicate and expected-key verification of one file

pub mod key_parity;
pub mod spot_check;
