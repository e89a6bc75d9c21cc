//! Shared constants for booklet production
//!
//! This module centralizes magic numbers used throughout
//! rasterization, splitting and imposition.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Rasterization & Compression
// =============================================================================

/// Rasterization scale factor (2.0 = 144 DPI)
pub const DEFAULT_RASTER_SCALE: f32 = 2.0;

/// JPEG quality used when encoding page images (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Largest width or height kept after normalization (pixels)
pub const DEFAULT_MAX_DIMENSION: u32 = 2000;

// =============================================================================
// Spread Splitting
// =============================================================================

/// Width of a split page in pixels (A4 portrait at 144 DPI)
pub const DEFAULT_SPLIT_PAGE_WIDTH_PX: u32 = 1190;

/// Height of a split page in pixels (A4 portrait at 144 DPI)
pub const DEFAULT_SPLIT_PAGE_HEIGHT_PX: u32 = 1684;

// =============================================================================
// Imposition
// =============================================================================

/// Logical pages carried by one saddle-stitched sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Logical pages placed on one output page side by side
pub const PAGES_PER_FACE: usize = 2;

/// Paper white, used when flattening transparency and for padding pages
pub const PAPER_WHITE: [u8; 3] = [255, 255, 255];
