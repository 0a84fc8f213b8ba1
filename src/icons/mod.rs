//! App icon generation.
//!
//! One base image is loaded and checked, the standard `logo_<size>.png` set
//! is written, then every platform target gets its own files. Failures are
//! contained per icon and collected into an [`IconRunSummary`].

pub mod error;
pub mod generator;
pub mod platform;
pub mod quality;

use std::path::Path;

use tracing::{error, info};

pub use error::{IconError, IconResult};
pub use generator::{IconFailure, IconGenerator, TargetOutcome, WrittenIcon};
pub use platform::{IconSpec, PlatformTarget};
pub use quality::{QualityReport, QualityWarning, validate_icon_quality};

use crate::{config::IconsConfig, paths::ProjectRoot};

/// Everything a generation run produced.
#[derive(Debug)]
pub struct IconRunSummary {
    /// Source dimensions as loaded.
    pub source_dimensions: (u32, u32),
    pub standard: TargetOutcome,
    /// Empty when the standard set produced nothing and the run stopped.
    pub platforms: Vec<TargetOutcome>,
}

impl IconRunSummary {
    /// At least one standard icon, and no platform icon failed.
    pub fn is_success(&self) -> bool {
        !self.standard.written.is_empty() && self.platforms.iter().all(TargetOutcome::is_success)
    }

    pub fn written_count(&self) -> usize {
        self.standard.written.len() + self.platforms.iter().map(|p| p.written.len()).sum::<usize>()
    }

    pub fn failure_count(&self) -> usize {
        self.standard.failures.len()
            + self
                .platforms
                .iter()
                .map(|p| p.failures.len())
                .sum::<usize>()
    }
}

/// Run the whole generation.
///
/// Returns `Err` only when the base image cannot be used; nothing has been
/// written in that case.
pub fn generate_all(root: &ProjectRoot, config: &IconsConfig) -> IconResult<IconRunSummary> {
    info!("Starting icon generation process...");

    let generator = IconGenerator::load_base_image(root, &config.source)?;

    info!("Generating standard icon sizes...");
    let standard =
        generator.generate_responsive_icons(Path::new(&config.assets_dir), &config.standard_sizes);

    let mut summary = IconRunSummary {
        source_dimensions: generator.dimensions(),
        standard,
        platforms: Vec::with_capacity(config.platforms.len()),
    };

    if summary.standard.written.is_empty() {
        error!("Failed to generate any standard icons");
        return Ok(summary);
    }

    for target in &config.platforms {
        info!("Generating {} icons...", target.name);
        summary.platforms.push(generator.generate_platform(target));
    }

    if summary.is_success() {
        info!("All icons generated successfully!");
    } else {
        error!("Some icons failed to generate.");
    }

    Ok(summary)
}
