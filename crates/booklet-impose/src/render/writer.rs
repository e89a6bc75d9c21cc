//! Output document assembly

use crate::compose::{Placement, SurfacePage};
use crate::constants::DEFAULT_JPEG_QUALITY;
use crate::layout::Rect;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::codec::encode_jpeg;

/// Sink for composed surfaces, one output page per call
pub trait DocumentWriter {
    type Output;

    /// Append one page to the output
    fn add_page(&mut self, surface: &SurfacePage) -> Result<()>;

    /// Number of pages written so far
    fn page_count(&self) -> usize;

    /// Close the page tree and hand back the finished document
    fn finish(self) -> Result<Self::Output>;
}

/// Writes surfaces into a `lopdf` document, each image as a JPEG XObject
pub struct PdfWriter {
    document: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    jpeg_quality: u8,
}

impl PdfWriter {
    pub fn new(jpeg_quality: u8) -> Self {
        let mut document = Document::with_version("1.5");
        let pages_tree_id = document.new_object_id();
        Self {
            document,
            pages_tree_id,
            page_refs: Vec::new(),
            jpeg_quality,
        }
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl DocumentWriter for PdfWriter {
    type Output = Document;

    fn add_page(&mut self, surface: &SurfacePage) -> Result<()> {
        let mut content_ops = String::new();
        let mut xobjects = Dictionary::new();

        for (idx, placement) in surface.placements.iter().enumerate() {
            let xobject_name = format!("Im{}", idx);
            let stream = encode_jpeg(&placement.image, self.jpeg_quality)?;
            let xobject_id = self.document.add_object(stream);
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
            content_ops.push_str(&generate_placement_command(&xobject_name, placement));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content_ops.into_bytes()));

        let page_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_tree_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(surface.width_pt),
                    Object::Real(surface.height_pt),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Object::Dictionary(resources)),
        ]);

        let page_id = self.document.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn finish(mut self) -> Result<Document> {
        if self.page_refs.is_empty() {
            return Err(BookletError::NoPages);
        }

        // Create pages tree
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.document
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let catalog_id = self.document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));

        self.document.trailer.set("Root", catalog_id);

        Ok(self.document)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Generate the PDF content stream command to place an image XObject.
///
/// Image XObjects occupy the unit square, so the matrix scales by the rect
/// size. A rotated placement flips both axes and moves the origin to the
/// opposite corner, which turns the image 180° inside the same rect.
fn generate_placement_command(xobject_name: &str, placement: &Placement) -> String {
    let Rect {
        x,
        y,
        width,
        height,
    } = placement.rect;

    if placement.rotated {
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            -width,
            -height,
            x + width,
            y + height,
            xobject_name
        )
    } else {
        format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            width, height, x, y, xobject_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use std::sync::Arc;

    fn placement(rotated: bool) -> Placement {
        Placement {
            source_page: 0,
            rect: Rect::new(10.0, 20.0, 100.0, 200.0),
            rotated,
            image: Arc::new(DynamicImage::ImageRgb8(RgbImage::new(2, 2))),
        }
    }

    #[test]
    fn test_upright_placement_matrix() {
        assert_eq!(
            generate_placement_command("Im0", &placement(false)),
            "q 100 0 0 200 10 20 cm /Im0 Do Q\n"
        );
    }

    #[test]
    fn test_rotated_placement_matrix() {
        assert_eq!(
            generate_placement_command("Im1", &placement(true)),
            "q -100 0 0 -200 110 220 cm /Im1 Do Q\n"
        );
    }

    #[test]
    fn test_finish_without_pages_fails() {
        let writer = PdfWriter::new(85);
        assert!(matches!(writer.finish(), Err(BookletError::NoPages)));
    }
}
