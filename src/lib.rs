//! assetctl - asset checks for a multi-platform mobile app
//!
//! A CLI tool and library with three independent utilities: a translation
//! key auditor, an app icon generator and a single-file translation spot
//! check.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale file model and the streaming JSON parser
//! - `icons`: Base image loading, resizing and per-platform icon output
//! - `paths`: Project-root confinement for all file I/O
//! - `rules`: Translation key parity and spot checks

pub mod cli;
pub mod config;
pub mod core;
pub mod icons;
pub mod paths;
pub mod rules;
