//! Page normalization
//!
//! Converts a raw rasterization into an opaque RGB (or grayscale) page and
//! clamps it to a pixel budget before any geometry is applied.

use crate::constants::PAPER_WHITE;
use crate::page::Page;
use crate::types::*;
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma, LumaA, Rgb, RgbImage, Rgba};

/// Normalize a raw image into a [`Page`].
///
/// Transparency is composited onto white, the image is converted to the
/// requested color policy, and images larger than `max_dimension` on either
/// side are scaled down uniformly with a Lanczos filter. Images are never
/// scaled up.
pub fn normalize(image: &DynamicImage, max_dimension: u32, policy: ColorPolicy) -> Result<Page> {
    let flattened = flatten(image)?;

    let colored = match policy {
        ColorPolicy::Rgb => match flattened {
            DynamicImage::ImageRgb8(_) => flattened,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        },
        ColorPolicy::Grayscale => match flattened {
            DynamicImage::ImageLuma8(_) => flattened,
            other => DynamicImage::ImageLuma8(other.to_luma8()),
        },
    };

    Ok(Page::new(clamp_dimensions(colored, max_dimension)))
}

/// Drop alpha by compositing onto white; reduce deep images to 8 bits per channel.
fn flatten(image: &DynamicImage) -> Result<DynamicImage> {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => Ok(image.clone()),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_) => {
            Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        DynamicImage::ImageLuma16(_) => Ok(DynamicImage::ImageLuma8(image.to_luma8())),
        DynamicImage::ImageLumaA8(_) | DynamicImage::ImageLumaA16(_) => {
            let la = image.to_luma_alpha8();
            let (width, height) = la.dimensions();
            let gray = GrayImage::from_fn(width, height, |x, y| {
                let LumaA([l, a]) = *la.get_pixel(x, y);
                Luma([blend(l, PAPER_WHITE[0], a)])
            });
            Ok(DynamicImage::ImageLuma8(gray))
        }
        DynamicImage::ImageRgba8(_)
        | DynamicImage::ImageRgba16(_)
        | DynamicImage::ImageRgba32F(_) => {
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            let rgb = RgbImage::from_fn(width, height, |x, y| {
                let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
                Rgb([
                    blend(r, PAPER_WHITE[0], a),
                    blend(g, PAPER_WHITE[1], a),
                    blend(b, PAPER_WHITE[2], a),
                ])
            });
            Ok(DynamicImage::ImageRgb8(rgb))
        }
        other => Err(BookletError::UnsupportedColorMode {
            page: None,
            color: format!("{:?}", other.color()),
        }),
    }
}

/// Source-over compositing of one channel onto an opaque background
#[inline]
fn blend(value: u8, background: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((value as u32 * a + background as u32 * (255 - a) + 127) / 255) as u8
}

fn clamp_dimensions(image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width <= max_dimension && height <= max_dimension {
        return image;
    }

    let ratio = f64::min(
        max_dimension as f64 / width as f64,
        max_dimension as f64 / height as f64,
    );
    let new_width = ((width as f64 * ratio) as u32).max(1);
    let new_height = ((height as f64 * ratio) as u32).max(1);

    log::debug!(
        "Scaling page {}x{} -> {}x{}",
        width,
        height,
        new_width,
        new_height
    );
    image.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
