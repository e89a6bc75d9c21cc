//! Single-page output documents
//!
//! Besides the imposed booklet, the pipeline can emit the split pages on their
//! own and a recompressed copy of the source.

use crate::compose::SurfacePage;
use crate::options::BookletOptions;
use crate::render::{DocumentWriter, PdfWriter};
use crate::source::RasterizedPages;
use crate::split::split_spreads;
use crate::stats::{compressed_statistics, split_statistics};
use crate::types::*;
use image::DynamicImage;

use super::{Booklet, normalize_pages};

/// Split spreads and write one portrait page per half.
pub fn build_split_document(
    raw_pages: Vec<DynamicImage>,
    options: &BookletOptions,
) -> Result<Booklet> {
    options.validate()?;

    let source_pages = raw_pages.len();
    let pages = normalize_pages(raw_pages, options)?;
    let pages = split_spreads(&pages, &options.split)?;

    let (width, height) = options
        .split_page_size
        .dimensions_pt(Orientation::Portrait);
    let mut writer = PdfWriter::new(options.jpeg_quality);
    for (index, page) in pages.iter().enumerate() {
        writer.add_page(&SurfacePage::full_bleed(page, index, width, height))?;
    }
    log::info!(
        "Split document: {} spreads -> {} pages",
        source_pages,
        writer.page_count()
    );

    Ok(Booklet {
        document: writer.finish()?,
        statistics: split_statistics(source_pages, options),
    })
}

/// Re-encode every page as one JPEG at the page's original size.
///
/// Page sizes come from `source.sizes_pt`; for PDF input these are the exact
/// page boxes, for images the raster size divided by the raster scale.
pub fn build_compressed_document(
    source: RasterizedPages,
    options: &BookletOptions,
) -> Result<Booklet> {
    options.validate()?;

    let RasterizedPages { images, sizes_pt } = source;
    let source_pages = images.len();
    if source_pages == 0 {
        return Err(BookletError::EmptySource);
    }
    if sizes_pt.len() != source_pages {
        return Err(BookletError::Geometry {
            stage: "compress",
            index: sizes_pt.len().min(source_pages),
            detail: format!(
                "{} page sizes supplied for {} pages",
                sizes_pt.len(),
                source_pages
            ),
        });
    }

    let pages = normalize_pages(images, options)?;

    let mut writer = PdfWriter::new(options.jpeg_quality);
    for (index, (page, (width, height))) in pages.iter().zip(sizes_pt).enumerate() {
        log::debug!("Compressing page {}/{}", index + 1, source_pages);
        writer.add_page(&SurfacePage::full_bleed(page, index, width, height))?;
    }

    Ok(Booklet {
        document: writer.finish()?,
        statistics: compressed_statistics(source_pages, options),
    })
}
