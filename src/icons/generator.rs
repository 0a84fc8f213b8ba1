//! Base image loading and icon rendering.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage, imageops::FilterType};
use tracing::{debug, error, info, warn};

use super::{
    error::{IconError, IconResult},
    platform::{PlatformTarget, standard_icon_name},
    quality::{QualityReport, validate_icon_quality},
};
use crate::paths::ProjectRoot;

/// Smallest acceptable edge of the source image.
pub const MIN_SOURCE_RESOLUTION: u32 = 64;

/// Sources larger than this are accepted with a warning.
pub const MAX_SOURCE_RESOLUTION: u32 = 4096;

const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// One icon that was written and passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub size: u32,
    pub path: PathBuf,
    pub quality: QualityReport,
}

/// One icon that could not be written or failed validation.
#[derive(Debug)]
pub struct IconFailure {
    pub size: u32,
    pub path: PathBuf,
    pub error: IconError,
}

/// Result of generating one target (the standard set or a platform).
#[derive(Debug, Default)]
pub struct TargetOutcome {
    pub name: String,
    pub written: Vec<WrittenIcon>,
    pub failures: Vec<IconFailure>,
}

impl TargetOutcome {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn record(&mut self, size: u32, path: PathBuf, result: IconResult<WrittenIcon>) {
        match result {
            Ok(icon) => self.written.push(icon),
            Err(error) => self.failures.push(IconFailure { size, path, error }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Written icon paths keyed by size. A size written twice keeps its last path.
    pub fn by_size(&self) -> BTreeMap<u32, PathBuf> {
        self.written
            .iter()
            .map(|icon| (icon.size, icon.path.clone()))
            .collect()
    }
}

/// Offset and edge of the largest centered square inside `width` x `height`.
///
/// Returns `(left, top, side)`.
pub fn crop_region(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Trim the longer dimension symmetrically to a square.
pub fn center_crop_square(img: &RgbaImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    if width == height {
        return img.clone();
    }
    let (left, top, side) = crop_region(width, height);
    image::imageops::crop_imm(img, left, top, side, side).to_image()
}

/// Create `dir` (and parents) after checking it stays inside the root.
pub fn ensure_dir(root: &ProjectRoot, dir: impl AsRef<Path>) -> IconResult<PathBuf> {
    let resolved = root.resolve(dir.as_ref())?;
    fs::create_dir_all(&resolved).map_err(|source| IconError::DirectoryFailed {
        path: resolved.clone(),
        source,
    })?;
    debug!("Directory ensured: {}", resolved.display());
    Ok(resolved)
}

/// A loaded, validated base image ready to render icons from.
///
/// The only way to obtain one is [`IconGenerator::load_base_image`], so an
/// unloaded generator cannot exist.
#[derive(Debug)]
pub struct IconGenerator {
    root: ProjectRoot,
    source: PathBuf,
    width: u32,
    height: u32,
    square: RgbaImage,
}

impl IconGenerator {
    /// Read `source`, normalize it to RGBA and check its resolution.
    pub fn load_base_image(root: &ProjectRoot, source: impl AsRef<Path>) -> IconResult<Self> {
        let source = root.resolve(source.as_ref())?;

        let base = image::open(&source)
            .map_err(|err| IconError::SourceUnreadable {
                path: source.clone(),
                source: err,
            })?
            .to_rgba8();
        let (width, height) = base.dimensions();

        if width != height {
            warn!(
                "Base image is not square: {}x{}. It will be center-cropped.",
                width, height
            );
        }

        if width.min(height) < MIN_SOURCE_RESOLUTION {
            return Err(IconError::SourceTooSmall {
                width,
                height,
                min: MIN_SOURCE_RESOLUTION,
            });
        }

        if width.max(height) > MAX_SOURCE_RESOLUTION {
            warn!(
                "Base image resolution very high: {}px (maximum recommended: {}px)",
                width.max(height),
                MAX_SOURCE_RESOLUTION
            );
        }

        info!("Base image loaded successfully: {}x{}", width, height);
        Ok(Self {
            root: root.clone(),
            source,
            width,
            height,
            square: center_crop_square(&base),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Dimensions of the source as loaded, before cropping.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    /// Render the square base at `size` x `size`.
    pub fn render(&self, size: u32) -> RgbaImage {
        if size == self.square.width() {
            self.square.clone()
        } else {
            image::imageops::resize(&self.square, size, size, RESAMPLE_FILTER)
        }
    }

    /// Render, write and validate one icon.
    pub fn save_icon(&self, path: impl AsRef<Path>, size: u32) -> IconResult<WrittenIcon> {
        let path = self.root.resolve(path.as_ref())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| IconError::DirectoryFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        self.render(size)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::SizeWriteFailed {
                path: path.clone(),
                size,
                source,
            })?;

        let quality = validate_icon_quality(&path)?;
        Ok(WrittenIcon {
            size,
            path,
            quality,
        })
    }

    /// Write `logo_<size>.png` into `assets_dir` for every size.
    ///
    /// Only sizes that were written and validated end up in `written`.
    pub fn generate_responsive_icons(&self, assets_dir: &Path, sizes: &[u32]) -> TargetOutcome {
        let mut outcome = TargetOutcome::new("standard");

        if let Err(err) = ensure_dir(&self.root, assets_dir) {
            error!("{}", err);
        }

        for &size in sizes {
            let path = assets_dir.join(standard_icon_name(size));
            let result = self.save_icon(&path, size);
            match &result {
                Ok(icon) => info!("Generated icon: {}", icon.path.display()),
                Err(err) => error!("Failed to generate icon size {}: {}", size, err),
            }
            outcome.record(size, path, result);
        }

        outcome
    }

    /// Write every icon of one platform target.
    ///
    /// A failing icon is recorded and the remaining icons are still written.
    pub fn generate_platform(&self, target: &PlatformTarget) -> TargetOutcome {
        let mut outcome = TargetOutcome::new(&target.name);
        let dir = Path::new(&target.dir);

        if let Err(err) = ensure_dir(&self.root, dir) {
            error!("{}", err);
        }

        for icon in &target.icons {
            let path = dir.join(&icon.path);
            let result = self.save_icon(&path, icon.size);
            match &result {
                Ok(written) => debug!("Generated {} icon: {}", target.name, written.path.display()),
                Err(err) => error!("Failed to generate {} icon: {}", target.name, err),
            }
            outcome.record(icon.size, path, result);
        }

        outcome
    }
}
