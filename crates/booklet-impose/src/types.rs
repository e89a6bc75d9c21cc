use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("No source pages supplied")]
    EmptySource,
    #[error("No pages to impose")]
    NoPages,
    #[error("Unsupported color mode {color}{}", page_suffix(.page))]
    UnsupportedColorMode { page: Option<usize>, color: String },
    #[error("Geometry error in {stage} at index {index}: {detail}")]
    Geometry {
        stage: &'static str,
        /// Sheet index for composition, spread index for splitting
        index: usize,
        detail: String,
    },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Rasterizer error: {0}")]
    Rasterize(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

fn page_suffix(page: &Option<usize>) -> String {
    page.map(|p| format!(" on page {}", p + 1)).unwrap_or_default()
}

impl BookletError {
    /// Attach a source page index to errors raised before the page was known
    pub(crate) fn at_page(self, index: usize) -> Self {
        match self {
            BookletError::UnsupportedColorMode { page: None, color } => {
                BookletError::UnsupportedColorMode {
                    page: Some(index),
                    color,
                }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    Portrait,
    /// Landscape: width > height (default for booklet sheets)
    #[default]
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Dimensions in points with orientation applied
    pub fn dimensions_pt(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_with_orientation(orientation);
        (crate::constants::mm_to_pt(w), crate::constants::mm_to_pt(h))
    }

    /// Short human-readable name used in format labels
    pub fn label(self) -> String {
        match self {
            PaperSize::A3 => "A3".to_string(),
            PaperSize::A4 => "A4".to_string(),
            PaperSize::A5 => "A5".to_string(),
            PaperSize::Letter => "Letter".to_string(),
            PaperSize::Legal => "Legal".to_string(),
            PaperSize::Tabloid => "Tabloid".to_string(),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => format!("{}x{}mm", width_mm, height_mm),
        }
    }
}

/// How logical pages are imposed onto physical sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ImpositionMode {
    /// Saddle-stitch signature: 4 pages per sheet (2 per side), outer pages inverted
    #[default]
    FourUpSaddleStitch,
    /// Pages paired symmetrically inward, 2 per output page, every second output page inverted
    TwoUpPaired,
}

impl ImpositionMode {
    /// Pages the padded count must be a multiple of
    pub fn page_multiple(self) -> usize {
        match self {
            ImpositionMode::FourUpSaddleStitch => crate::constants::PAGES_PER_SHEET,
            ImpositionMode::TwoUpPaired => crate::constants::PAGES_PER_FACE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpositionMode::FourUpSaddleStitch => "saddle-stitch",
            ImpositionMode::TwoUpPaired => "2 pages per sheet, saddle-stitch",
        }
    }
}

/// Which slots are printed upside down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RotationRule {
    /// Rotate 180° so that the folded, duplex-printed stack reads upright
    /// (outer slots in saddle-stitch, odd output pages in paired mode)
    #[default]
    InvertOuter,
    /// Never rotate
    Upright,
}

/// Output color model for normalized pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColorPolicy {
    #[default]
    Rgb,
    Grayscale,
}

/// Which half of the cover spread becomes the first page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CoverHalf {
    #[default]
    Right,
    Left,
    /// Keep the whole cover image as one page
    Whole,
}

/// Emission order of the two halves of an inner spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HalfOrder {
    /// Right (text) half first, then left (picture) half
    #[default]
    RightFirst,
    LeftFirst,
}

/// Statistics about a produced (or planned) document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Pages delivered by the rasterizer
    pub source_pages: usize,
    /// Pages handed to the planner (after spread splitting, before padding)
    pub imposed_pages: usize,
    /// Blank pages appended for padding
    pub blank_pages_added: usize,
    /// Physical sheets of paper
    pub sheets: usize,
    /// Pages in the output document
    pub output_pages: usize,
    /// Human-readable description of the output layout
    pub format: String,
    /// Printer setting needed for the pages to read in order once folded
    pub duplex_hint: String,
}
