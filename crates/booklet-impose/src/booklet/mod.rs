//! Booklet assembly
//!
//! This module orchestrates the whole pipeline:
//! 1. Normalize raw page images
//! 2. Optionally split spreads into single pages
//! 3. Pad and plan the imposition
//! 4. Compose each sheet face and write it to the output PDF

mod companion;
mod io;

pub use companion::{build_compressed_document, build_split_document};
pub use io::{count_source_pages, load_pdf_pages, load_source, publish_pdf, save_pdf};

use crate::compose::compose;
use crate::layout::plan_imposition_with;
use crate::normalize::normalize;
use crate::options::BookletOptions;
use crate::page::{Page, pad_pages};
use crate::render::{DocumentWriter, PdfWriter};
use crate::source::RasterizedPages;
use crate::split::split_spreads;
use crate::stats::plan_statistics;
use crate::types::*;
use image::DynamicImage;
use lopdf::Document;

/// A finished output document and what went into it
#[derive(Debug)]
pub struct Booklet {
    pub document: Document,
    pub statistics: BookletStatistics,
}

/// Build the booklet on a blocking worker thread
pub async fn run_booklet(raw_pages: Vec<DynamicImage>, options: &BookletOptions) -> Result<Booklet> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || build_booklet(raw_pages, &options)).await?
}

/// Build the split-pages document on a blocking worker thread
pub async fn run_split_document(
    raw_pages: Vec<DynamicImage>,
    options: &BookletOptions,
) -> Result<Booklet> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || build_split_document(raw_pages, &options)).await?
}

/// Build the compressed document on a blocking worker thread
pub async fn run_compressed_document(
    source: RasterizedPages,
    options: &BookletOptions,
) -> Result<Booklet> {
    let options = options.clone();
    tokio::task::spawn_blocking(move || build_compressed_document(source, &options)).await?
}

/// Run the full booklet pipeline over raw page images.
///
/// Raw images are consumed one at a time during normalization, so only the
/// normalized pages stay alive while sheets are composed.
pub fn build_booklet(raw_pages: Vec<DynamicImage>, options: &BookletOptions) -> Result<Booklet> {
    options.validate()?;

    let source_pages = raw_pages.len();
    if source_pages == 0 {
        return Err(BookletError::EmptySource);
    }

    log::info!("Building booklet from {} source pages", source_pages);
    let mut pages = normalize_pages(raw_pages, options)?;

    if options.split_spreads {
        pages = split_spreads(&pages, &options.split)?;
        log::info!("Split {} spreads into {} pages", source_pages, pages.len());
    }

    impose_pages(pages, source_pages, options)
}

/// Normalize every raw image, tagging failures with the page they came from.
pub fn normalize_pages(raw_pages: Vec<DynamicImage>, options: &BookletOptions) -> Result<Vec<Page>> {
    raw_pages
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize(&raw, options.max_dimension, options.color_policy)
                .map_err(|e| e.at_page(index))
        })
        .collect()
}

/// Pad, plan and write already-normalized pages.
pub fn impose_pages(
    mut pages: Vec<Page>,
    source_pages: usize,
    options: &BookletOptions,
) -> Result<Booklet> {
    let plan = plan_imposition_with(pages.len(), options.imposition_mode, options.rotation_rule)?;
    let added = pad_pages(&mut pages, options.imposition_mode.page_multiple());
    debug_assert_eq!(pages.len(), plan.padded_count);

    if added > 0 {
        log::info!("Added {} blank pages (total: {})", added, pages.len());
    }

    let (sheet_width, sheet_height) = options.sheet_dimensions_pt();
    let mut writer = PdfWriter::new(options.jpeg_quality);

    for sheet in &plan.sheets {
        for face in sheet.faces() {
            let surface = compose(face, &pages, sheet_width, sheet_height)?;
            writer.add_page(&surface)?;
        }
        log::debug!("Sheet {}/{} written", sheet.index + 1, plan.sheet_count());
    }

    let document = writer.finish()?;
    let statistics = plan_statistics(source_pages, &plan, options);
    log::info!(
        "Booklet ready: {} sheets, {} output pages",
        statistics.sheets,
        statistics.output_pages
    );

    Ok(Booklet {
        document,
        statistics,
    })
}
