use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How spreads are cut into single pages
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    /// Which half of the first spread is kept as the cover
    pub cover_half: CoverHalf,
    /// Order in which the halves of inner spreads are emitted
    pub half_order: HalfOrder,
    /// Width of every emitted page in pixels
    pub page_width_px: u32,
    /// Height of every emitted page in pixels
    pub page_height_px: u32,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            cover_half: CoverHalf::Right,
            half_order: HalfOrder::RightFirst,
            page_width_px: DEFAULT_SPLIT_PAGE_WIDTH_PX,
            page_height_px: DEFAULT_SPLIT_PAGE_HEIGHT_PX,
        }
    }
}

/// Comprehensive booklet configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Imposition
    pub imposition_mode: ImpositionMode,
    pub rotation_rule: RotationRule,

    // Spread splitting
    pub split_spreads: bool,
    pub split: SplitOptions,

    // Output sheets
    pub sheet_size: PaperSize,
    pub sheet_orientation: Orientation,
    /// Page size of the split-pages document (always portrait)
    pub split_page_size: PaperSize,

    // Compression
    pub jpeg_quality: u8,
    pub max_dimension: u32,
    pub color_policy: ColorPolicy,

    // Rasterization
    pub raster_scale: f32,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            imposition_mode: ImpositionMode::FourUpSaddleStitch,
            rotation_rule: RotationRule::InvertOuter,
            split_spreads: false,
            split: SplitOptions::default(),
            sheet_size: PaperSize::A4,
            sheet_orientation: Orientation::Landscape,
            split_page_size: PaperSize::A4,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_dimension: DEFAULT_MAX_DIMENSION,
            color_policy: ColorPolicy::Rgb,
            raster_scale: DEFAULT_RASTER_SCALE,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Output sheet dimensions in points
    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        self.sheet_size.dimensions_pt(self.sheet_orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(BookletError::Config(format!(
                "JPEG quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }

        if self.max_dimension == 0 {
            return Err(BookletError::Config(
                "Maximum dimension must be at least 1 pixel".to_string(),
            ));
        }

        if !(self.raster_scale.is_finite() && self.raster_scale > 0.0) {
            return Err(BookletError::Config(format!(
                "Raster scale must be positive, got {}",
                self.raster_scale
            )));
        }

        if self.split.page_width_px == 0 || self.split.page_height_px == 0 {
            return Err(BookletError::Config(
                "Split page size must be non-zero".to_string(),
            ));
        }

        for (name, size) in [
            ("Sheet", self.sheet_size),
            ("Split page", self.split_page_size),
        ] {
            let (w, h) = size.dimensions_mm();
            if !(w > 0.0 && h > 0.0) {
                return Err(BookletError::Config(format!(
                    "{} size must be positive, got {}x{}mm",
                    name, w, h
                )));
            }
        }

        Ok(())
    }
}
