//! PDF rendering modules for booklet output
//!
//! This module handles all PDF-specific operations:
//! - Encoding page images as JPEG XObjects
//! - Building output pages from composed surfaces
//! - Generating placement matrices (including 180° rotation)

mod codec;
mod writer;

pub use codec::encode_jpeg;
pub use writer::{DocumentWriter, PdfWriter};
