//! Image files as a page source

use crate::types::*;
use image::DynamicImage;
use std::path::Path;

use super::Rasterizer;

/// An ordered list of already-decoded images, one per page.
///
/// Images are treated as rendered at 1.0; any other scale resamples them.
#[derive(Debug, Clone, Default)]
pub struct ImageSequence {
    images: Vec<DynamicImage>,
}

impl ImageSequence {
    pub fn new(images: Vec<DynamicImage>) -> Self {
        Self { images }
    }

    /// Decode image files in the given order
    pub async fn load(paths: &[impl AsRef<Path>]) -> Result<Self> {
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            let bytes = tokio::fs::read(path.as_ref()).await?;
            let image =
                tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
            images.push(image);
        }
        Ok(Self::new(images))
    }

    pub fn into_images(self) -> Vec<DynamicImage> {
        self.images
    }

    fn image(&self, page_index: usize) -> Result<&DynamicImage> {
        self.images.get(page_index).ok_or_else(|| {
            BookletError::Rasterize(format!(
                "page {} requested from a source of {} images",
                page_index + 1,
                self.images.len()
            ))
        })
    }
}

impl Rasterizer for ImageSequence {
    fn page_count(&self) -> usize {
        self.images.len()
    }

    fn page_size_pt(&self, page_index: usize) -> Result<(f32, f32)> {
        let image = self.image(page_index)?;
        Ok((image.width() as f32, image.height() as f32))
    }

    fn rasterize(&self, page_index: usize, scale: f32) -> Result<DynamicImage> {
        let image = self.image(page_index)?;

        if (scale - 1.0).abs() < f32::EPSILON {
            return Ok(image.clone());
        }

        let width = ((image.width() as f32 * scale) as u32).max(1);
        let height = ((image.height() as f32 * scale) as u32).max(1);
        Ok(image.resize_exact(width, height, image::imageops::FilterType::Lanczos3))
    }
}
