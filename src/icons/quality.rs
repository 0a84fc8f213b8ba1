//! Post-write checks for generated icons.
//!
//! Only a missing file, an undecodable file or an icon below
//! [`MIN_ICON_RESOLUTION`] fails the check. Everything else is a warning.

use std::{collections::HashSet, fmt, path::Path};

use image::{ColorType, GenericImageView};
use tracing::{info, warn};

use super::error::{IconError, IconResult};

/// Smallest acceptable icon edge in pixels.
pub const MIN_ICON_RESOLUTION: u32 = 16;

/// Fewer distinct RGBA values than this suggests a degenerate render.
pub const MIN_UNIQUE_COLORS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityWarning {
    NotSquare { width: u32, height: u32 },
    NoTransparency { color: ColorType },
    FewColors { count: usize },
}

impl fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityWarning::NotSquare { width, height } => {
                write!(f, "icon is not square: {}x{}", width, height)
            }
            QualityWarning::NoTransparency { color } => {
                write!(f, "icon does not have transparency: {:?}", color)
            }
            QualityWarning::FewColors { count } => {
                write!(f, "icon has very few unique colors: {}", count)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    pub unique_colors: usize,
    pub warnings: Vec<QualityWarning>,
}

/// Reload a written icon and check it.
pub fn validate_icon_quality(path: &Path) -> IconResult<QualityReport> {
    if !path.is_file() {
        return Err(IconError::OutputMissing {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| IconError::OutputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();

    let side = width.min(height);
    if side < MIN_ICON_RESOLUTION {
        return Err(IconError::IconTooSmall {
            path: path.to_path_buf(),
            side,
            min: MIN_ICON_RESOLUTION,
        });
    }

    let mut warnings = Vec::new();
    if width != height {
        warnings.push(QualityWarning::NotSquare { width, height });
    }

    let color = img.color();
    let has_alpha = color.has_alpha();
    if !has_alpha {
        warnings.push(QualityWarning::NoTransparency { color });
    }

    let unique_colors = count_unique_colors(&img.to_rgba8());
    if unique_colors < MIN_UNIQUE_COLORS {
        warnings.push(QualityWarning::FewColors {
            count: unique_colors,
        });
    }

    for warning in &warnings {
        warn!("{}: {}", path.display(), warning);
    }
    info!("Icon quality validated: {} ({}x{})", path.display(), width, height);

    Ok(QualityReport {
        width,
        height,
        has_alpha,
        unique_colors,
        warnings,
    })
}

fn count_unique_colors(img: &image::RgbaImage) -> usize {
    img.pixels().map(|p| p.0).collect::<HashSet<[u8; 4]>>().len()
}
