//! Spread splitting
//!
//! Storybook exports place two final pages on one spread image. The cover
//! spread contributes a single page; every later spread is cut at its
//! horizontal midpoint and both halves become pages of their own.

use crate::options::SplitOptions;
use crate::page::Page;
use crate::types::*;
use image::DynamicImage;
use image::imageops::FilterType;

/// Split spreads into single pages.
///
/// With the default options the output for `[P0, P1, P2]` is
/// `[right(P0), right(P1), left(P1), right(P2), left(P2)]`. Every emitted
/// page is filled to the configured page size with [`crop_to_fill`].
pub fn split_spreads(pages: &[Page], options: &SplitOptions) -> Result<Vec<Page>> {
    let Some((cover, spreads)) = pages.split_first() else {
        return Err(BookletError::EmptySource);
    };

    let (target_w, target_h) = (options.page_width_px, options.page_height_px);
    let mut output = Vec::with_capacity(1 + 2 * spreads.len());

    let (cover_left, cover_right) = halves(cover, 0)?;
    let cover_page = match options.cover_half {
        CoverHalf::Right => cover_right,
        CoverHalf::Left => cover_left,
        CoverHalf::Whole => cover.image().clone(),
    };
    log::debug!("Spread 1: cover ({:?})", options.cover_half);
    output.push(Page::new(crop_to_fill(&cover_page, target_w, target_h)));

    for (offset, spread) in spreads.iter().enumerate() {
        let index = offset + 1;
        let (left, right) = halves(spread, index)?;
        let ordered = match options.half_order {
            HalfOrder::RightFirst => [right, left],
            HalfOrder::LeftFirst => [left, right],
        };
        log::debug!("Spread {}: split ({:?})", index + 1, options.half_order);
        for half in ordered {
            output.push(Page::new(crop_to_fill(&half, target_w, target_h)));
        }
    }

    Ok(output)
}

/// Cut a spread at `width / 2` into (left, right) halves.
fn halves(spread: &Page, index: usize) -> Result<(DynamicImage, DynamicImage)> {
    let (width, height) = spread.dimensions();
    if width < 2 {
        return Err(BookletError::Geometry {
            stage: "split",
            index,
            detail: format!("spread {} is {}px wide and cannot be halved", index + 1, width),
        });
    }

    let mid = width / 2;
    let image = spread.image();
    Ok((
        image.crop_imm(0, 0, mid, height),
        image.crop_imm(mid, 0, width - mid, height),
    ))
}

/// Scale `image` so it covers `target_width × target_height`, then center-crop the overflow.
///
/// The result is always exactly the target size; nothing is letterboxed.
/// Only the window that survives the crop is resampled.
pub fn crop_to_fill(image: &DynamicImage, target_width: u32, target_height: u32) -> DynamicImage {
    let (x, y, width, height) =
        fill_window(image.width(), image.height(), target_width, target_height);
    let window = image.crop_imm(x, y, width, height);

    if (width, height) == (target_width, target_height) {
        window
    } else {
        window.resize_exact(target_width, target_height, FilterType::Lanczos3)
    }
}

/// The centered source region `(x, y, width, height)` that [`crop_to_fill`] keeps.
///
/// Scaling by `max(tw/w, th/h)` makes the image cover the target; the window
/// is the target size mapped back through that scale, clamped to the image.
pub fn fill_window(
    width: u32,
    height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32, u32, u32) {
    let (width, height) = (width.max(1), height.max(1));
    let ratio = f64::max(
        target_width as f64 / width as f64,
        target_height as f64 / height as f64,
    );

    let window_width = ((target_width as f64 / ratio).round() as u32).clamp(1, width);
    let window_height = ((target_height as f64 / ratio).round() as u32).clamp(1, height);

    (
        (width - window_width) / 2,
        (height - window_height) / 2,
        window_width,
        window_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_halves_odd_width_gives_right_the_extra_column() {
        let page = Page::new(DynamicImage::ImageRgb8(RgbImage::new(11, 4)));
        let (left, right) = halves(&page, 0).unwrap();
        assert_eq!(left.width(), 5);
        assert_eq!(right.width(), 6);
    }

    #[test]
    fn test_fill_window_matching_aspect_keeps_everything() {
        assert_eq!(fill_window(595, 842, 1190, 1684), (0, 0, 595, 842));
    }

    #[test]
    fn test_halves_rejects_sliver() {
        let page = Page::new(DynamicImage::ImageRgb8(RgbImage::new(1, 4)));
        assert!(matches!(
            halves(&page, 3),
            Err(BookletError::Geometry { index: 3, .. })
        ));
    }
}
