//! Rasterized pages
//!
//! A [`Page`] is an immutable raster image. Splitting, resizing and padding
//! always produce new pages; the pixel buffer is shared behind an `Arc` so
//! pages can be handed to the composer without copying.

use crate::constants::PAPER_WHITE;
use image::{DynamicImage, Rgb, RgbImage};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Page {
    image: Arc<DynamicImage>,
    blank: bool,
}

impl Page {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image: Arc::new(image),
            blank: false,
        }
    }

    /// A white padding page
    pub fn blank(width: u32, height: u32) -> Self {
        let white = RgbImage::from_pixel(width.max(1), height.max(1), Rgb(PAPER_WHITE));
        Self {
            image: Arc::new(DynamicImage::ImageRgb8(white)),
            blank: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub(crate) fn shared_image(&self) -> Arc<DynamicImage> {
        Arc::clone(&self.image)
    }

    /// Whether this page was inserted as padding
    pub fn is_blank(&self) -> bool {
        self.blank
    }
}

/// The most frequent page size in a set; ties go to the size seen first.
pub fn dominant_size(pages: &[Page]) -> Option<(u32, u32)> {
    let mut counts: HashMap<(u32, u32), (usize, usize)> = HashMap::new();
    for (idx, page) in pages.iter().enumerate() {
        let entry = counts.entry(page.dimensions()).or_insert((0, idx));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(size, _)| size)
}

/// Append blank pages of the dominant size until `pages.len()` is a multiple of `multiple`.
///
/// Returns the number of pages added.
pub fn pad_pages(pages: &mut Vec<Page>, multiple: usize) -> usize {
    let Some((width, height)) = dominant_size(pages) else {
        return 0;
    };
    let padded = pages.len().div_ceil(multiple) * multiple;
    let missing = padded - pages.len();
    if missing > 0 {
        let pad = Page::blank(width, height);
        pages.extend(std::iter::repeat_n(pad, missing));
    }
    missing
}
