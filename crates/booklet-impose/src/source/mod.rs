//! Page sources
//!
//! A [`Rasterizer`] turns a document into raw images, one per page. The
//! booklet pipeline only ever sees the images it produces.

mod images;
#[cfg(feature = "pdfium")]
mod pdfium;

pub use images::ImageSequence;
#[cfg(feature = "pdfium")]
pub use pdfium::{PdfiumRasterizer, init_pdfium};

use crate::types::Result;
use image::DynamicImage;

/// Raw page images and the size of the page each one was rendered from
#[derive(Debug, Clone, Default)]
pub struct RasterizedPages {
    pub images: Vec<DynamicImage>,
    /// Page sizes in points, one per image
    pub sizes_pt: Vec<(f32, f32)>,
}

impl RasterizedPages {
    /// Images whose page size is only known through the scale they were rendered at
    pub fn from_images(images: Vec<DynamicImage>, scale: f32) -> Self {
        let sizes_pt = images
            .iter()
            .map(|image| (image.width() as f32 / scale, image.height() as f32 / scale))
            .collect();
        Self { images, sizes_pt }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn append(&mut self, mut other: RasterizedPages) {
        self.images.append(&mut other.images);
        self.sizes_pt.append(&mut other.sizes_pt);
    }
}

pub trait Rasterizer {
    /// Number of pages in the source
    fn page_count(&self) -> usize;

    /// Page size in points (1 pt = 1 px at scale 1.0)
    fn page_size_pt(&self, page_index: usize) -> Result<(f32, f32)>;

    /// Render one page at `scale` (1.0 = 72 DPI)
    fn rasterize(&self, page_index: usize, scale: f32) -> Result<DynamicImage>;
}

/// Rasterize every page of `source` in order.
pub fn rasterize_all(source: &dyn Rasterizer, scale: f32) -> Result<RasterizedPages> {
    let count = source.page_count();
    let mut pages = RasterizedPages {
        images: Vec::with_capacity(count),
        sizes_pt: Vec::with_capacity(count),
    };
    for index in 0..count {
        log::debug!("Rasterizing page {}/{}", index + 1, count);
        pages.sizes_pt.push(source.page_size_pt(index)?);
        pages.images.push(source.rasterize(index, scale)?);
    }
    Ok(pages)
}
