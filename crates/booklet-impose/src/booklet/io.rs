//! Document I/O operations for booklets

use crate::options::BookletOptions;
use crate::source::{ImageSequence, RasterizedPages};
use crate::types::*;
use lopdf::Document;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Load raw page images from PDFs and image files, in the order given.
///
/// PDFs are rasterized at `options.raster_scale` and keep their exact page
/// sizes; image files are taken as already rendered at that scale.
pub async fn load_source(
    paths: &[impl AsRef<Path>],
    options: &BookletOptions,
) -> Result<RasterizedPages> {
    let mut pages = RasterizedPages::default();
    for path in paths {
        let path = path.as_ref();
        if is_pdf(path) {
            pages.append(load_pdf_pages(path, options.raster_scale).await?);
        } else {
            let images = ImageSequence::load(&[path]).await?.into_images();
            pages.append(RasterizedPages::from_images(images, options.raster_scale));
        }
    }

    if pages.is_empty() {
        return Err(BookletError::EmptySource);
    }
    log::info!("Loaded {} pages from {} file(s)", pages.len(), paths.len());
    Ok(pages)
}

/// Count source pages without rasterizing anything.
///
/// PDFs are parsed for their page tree; every other file counts as one page.
pub async fn count_source_pages(paths: &[impl AsRef<Path>]) -> Result<usize> {
    let mut total = 0;
    for path in paths {
        let path = path.as_ref();
        if is_pdf(path) {
            let bytes = tokio::fs::read(path).await?;
            let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
            total += doc.get_pages().len();
        } else {
            total += 1;
        }
    }
    Ok(total)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Rasterize every page of a PDF
#[cfg(feature = "pdfium")]
pub async fn load_pdf_pages(path: impl AsRef<Path>, scale: f32) -> Result<RasterizedPages> {
    use crate::source::{PdfiumRasterizer, init_pdfium, rasterize_all};

    let bytes = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || {
        let pdfium = init_pdfium()?;
        let rasterizer = PdfiumRasterizer::from_bytes(&pdfium, &bytes)?;
        rasterize_all(&rasterizer, scale)
    })
    .await?
}

/// Rasterize every page of a PDF
#[cfg(not(feature = "pdfium"))]
pub async fn load_pdf_pages(path: impl AsRef<Path>, _scale: f32) -> Result<RasterizedPages> {
    Err(BookletError::Config(format!(
        "Cannot rasterize {}: built without the `pdfium` feature",
        path.as_ref().display()
    )))
}

/// Save the document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, BookletError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Save the document so that `path` never holds a partial file.
///
/// The bytes go to `<path>.partial` first, which is then renamed over `path`.
pub async fn publish_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let partial = partial_path(path);

    if let Err(e) = save_pdf(doc, &partial).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e);
    }
    tokio::fs::rename(&partial, path).await?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".partial");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_path_appends_suffix() {
        assert_eq!(
            partial_path(Path::new("out/booklet.pdf")),
            PathBuf::from("out/booklet.pdf.partial")
        );
    }

    #[test]
    fn test_is_pdf_ignores_case() {
        assert!(is_pdf(Path::new("story.PDF")));
        assert!(!is_pdf(Path::new("story.png")));
    }
}
