//! Error kinds for icon generation.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::paths::PathRejected;

/// Errors raised while loading the base image or writing one icon.
///
/// Every variant is contained at the smallest unit it concerns: a source
/// error aborts the run, an output error fails only that icon.
#[derive(Debug, Error)]
pub enum IconError {
    #[error(transparent)]
    PathRejected(#[from] PathRejected),

    #[error("source image '{}' could not be read: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("source image resolution too low: {width}x{height} (minimum: {min}px)")]
    SourceTooSmall { width: u32, height: u32, min: u32 },

    #[error("failed to create directory '{}': {source}", .path.display())]
    DirectoryFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {size}px icon '{}': {source}", .path.display())]
    SizeWriteFailed {
        path: PathBuf,
        size: u32,
        #[source]
        source: image::ImageError,
    },

    #[error("generated icon not found: '{}'", .path.display())]
    OutputMissing { path: PathBuf },

    #[error("generated icon '{}' could not be decoded: {source}", .path.display())]
    OutputUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("icon resolution too low: '{}' is {side}px (minimum: {min}px)", .path.display())]
    IconTooSmall { path: PathBuf, side: u32, min: u32 },
}

pub type IconResult<T> = Result<T, IconError>;
