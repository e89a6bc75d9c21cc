//! JPEG image XObjects

use crate::types::*;
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use lopdf::{Dictionary, Object, Stream};

/// Encode `image` as a DCT-compressed image XObject stream.
///
/// Grayscale images stay single channel; everything else is written as RGB.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Stream> {
    let (encoded, color_space) = match image {
        DynamicImage::ImageLuma8(_) => (None, "DeviceGray"),
        DynamicImage::ImageRgb8(_) => (None, "DeviceRGB"),
        other => (Some(DynamicImage::ImageRgb8(other.to_rgb8())), "DeviceRGB"),
    };
    let image = encoded.as_ref().unwrap_or(image);

    let mut jpeg_bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, quality.clamp(1, 100));
    image.write_with_encoder(encoder)?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width() as i64));
    dict.set("Height", Object::Integer(image.height() as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
    dict.set("Length", Object::Integer(jpeg_bytes.len() as i64));

    // Already compressed; keep lopdf from running Flate over it
    Ok(Stream::new(dict, jpeg_bytes).with_compression(false))
}
