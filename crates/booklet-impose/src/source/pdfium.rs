//! PDF rasterization through pdfium

use crate::types::*;
use image::{DynamicImage, RgbaImage};
use pdfium_render::prelude::*;

use super::Rasterizer;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
pub fn init_pdfium() -> Result<Pdfium> {
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(rasterize_error)
}

/// Renders pages of an open pdfium document
pub struct PdfiumRasterizer<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumRasterizer<'a> {
    pub fn from_bytes(pdfium: &'a Pdfium, bytes: &'a [u8]) -> Result<Self> {
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(rasterize_error)?;
        Ok(Self { document })
    }

    fn page(&self, page_index: usize) -> Result<PdfPage<'a>> {
        self.document
            .pages()
            .get(page_index as u16)
            .map_err(rasterize_error)
    }
}

impl Rasterizer for PdfiumRasterizer<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_size_pt(&self, page_index: usize) -> Result<(f32, f32)> {
        let page = self.page(page_index)?;
        Ok((page.width().value, page.height().value))
    }

    fn rasterize(&self, page_index: usize, scale: f32) -> Result<DynamicImage> {
        let page = self.page(page_index)?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = page.render_with_config(&config).map_err(rasterize_error)?;

        let width = bitmap.width() as u32;
        let height = bitmap.height() as u32;
        let rgba = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes().to_vec()).ok_or_else(|| {
            BookletError::Rasterize(format!(
                "page {} bitmap does not match {}x{}",
                page_index + 1,
                width,
                height
            ))
        })?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }
}

fn rasterize_error(error: PdfiumError) -> BookletError {
    BookletError::Rasterize(error.to_string())
}
