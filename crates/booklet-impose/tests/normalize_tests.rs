use booklet_impose::*;
use image::{DynamicImage, GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

#[test]
fn test_transparent_pixels_become_white() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0])));
    let page = normalize(&image, 2000, ColorPolicy::Rgb).unwrap();

    assert!(matches!(page.image(), DynamicImage::ImageRgb8(_)));
    assert_eq!(page.image().to_rgb8().get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn test_opaque_pixels_are_kept() {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])));
    let page = normalize(&image, 2000, ColorPolicy::Rgb).unwrap();
    assert_eq!(page.image().to_rgb8().get_pixel(2, 2).0, [10, 20, 30]);
}

#[test]
fn test_gray_alpha_flattens_to_gray() {
    let image = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(3, 3, LumaA([0, 0])));
    let page = normalize(&image, 2000, ColorPolicy::Grayscale).unwrap();

    assert!(matches!(page.image(), DynamicImage::ImageLuma8(_)));
    assert_eq!(page.image().to_luma8().get_pixel(1, 1).0, [255]);
}

#[test]
fn test_grayscale_policy_converts_rgb() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([255, 255, 255])));
    let page = normalize(&image, 2000, ColorPolicy::Grayscale).unwrap();
    assert!(matches!(page.image(), DynamicImage::ImageLuma8(_)));
}

#[test]
fn test_large_images_are_scaled_down_uniformly() {
    let image = DynamicImage::ImageRgb8(RgbImage::new(4000, 1000));
    let page = normalize(&image, 2000, ColorPolicy::Rgb).unwrap();
    assert_eq!(page.dimensions(), (2000, 500));
}

#[test]
fn test_small_images_are_never_upscaled() {
    let image = DynamicImage::ImageRgb8(RgbImage::new(300, 200));
    let page = normalize(&image, 2000, ColorPolicy::Rgb).unwrap();
    assert_eq!(page.dimensions(), (300, 200));
}

#[test]
fn test_extreme_aspect_keeps_one_pixel() {
    let image = DynamicImage::ImageRgb8(RgbImage::new(5000, 1));
    let page = normalize(&image, 100, ColorPolicy::Rgb).unwrap();
    assert_eq!(page.dimensions(), (100, 1));
}

#[test]
fn test_sixteen_bit_input_is_reduced() {
    let image = DynamicImage::ImageRgb16(image::ImageBuffer::new(8, 8));
    let page = normalize(&image, 2000, ColorPolicy::Rgb).unwrap();
    assert!(matches!(page.image(), DynamicImage::ImageRgb8(_)));
    assert!(!page.is_blank());
}
