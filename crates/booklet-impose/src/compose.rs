//! Sheet composition
//!
//! Turns one planned [`SheetFace`] into a [`SurfacePage`]: the output page
//! size plus the image placements for its two halves. No pixels are copied;
//! placements share the page buffers.

use crate::layout::{Rect, SheetFace, Slot, fit_contain, sheet_halves};
use crate::page::Page;
use crate::types::*;
use image::DynamicImage;
use std::sync::Arc;

/// One page image positioned on an output surface
#[derive(Debug, Clone)]
pub struct Placement {
    /// Index of the page in the padded sequence
    pub source_page: usize,
    /// Where the image lands, in points
    pub rect: Rect,
    /// Printed 180° about the center of `rect`
    pub rotated: bool,
    pub image: Arc<DynamicImage>,
}

/// A composed output page
#[derive(Debug, Clone)]
pub struct SurfacePage {
    pub width_pt: f32,
    pub height_pt: f32,
    pub placements: Vec<Placement>,
}

impl SurfacePage {
    /// A page with a single image stretched over the whole surface
    pub fn full_bleed(page: &Page, source_page: usize, width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
            placements: vec![Placement {
                source_page,
                rect: Rect::new(0.0, 0.0, width_pt, height_pt),
                rotated: false,
                image: page.shared_image(),
            }],
        }
    }
}

/// Lay out both slots of `face` on a `target_width × target_height` surface.
///
/// Each page is fit inside its half of the surface and centered. Padding
/// pages leave their half empty.
pub fn compose(
    face: &SheetFace,
    pages: &[Page],
    target_width: f32,
    target_height: f32,
) -> Result<SurfacePage> {
    if !(target_width > 0.0 && target_height > 0.0) {
        return Err(BookletError::Geometry {
            stage: "compose",
            index: face.sheet,
            detail: format!(
                "surface {}x{}pt has no area",
                target_width, target_height
            ),
        });
    }

    let (left_half, right_half) = sheet_halves(target_width, target_height);
    let mut placements = Vec::with_capacity(2);

    for (slot, half) in [(face.left, left_half), (face.right, right_half)] {
        if let Some(placement) = place_slot(face, slot, &half, pages)? {
            placements.push(placement);
        }
    }

    Ok(SurfacePage {
        width_pt: target_width,
        height_pt: target_height,
        placements,
    })
}

fn place_slot(
    face: &SheetFace,
    slot: Slot,
    half: &Rect,
    pages: &[Page],
) -> Result<Option<Placement>> {
    let page = pages.get(slot.page).ok_or_else(|| BookletError::Geometry {
        stage: "compose",
        index: face.sheet,
        detail: format!(
            "{:?} slot refers to page {} but only {} pages exist",
            face.side,
            slot.page + 1,
            pages.len()
        ),
    })?;

    if page.is_blank() {
        return Ok(None);
    }

    let rect = fit_contain(half, page.width() as f32, page.height() as f32);
    debug_assert!(half.contains(&rect));
    Ok(Some(Placement {
        source_page: slot.page,
        rect,
        rotated: slot.rotated,
        image: page.shared_image(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SheetSide;
    use image::RgbImage;

    fn face(left: Slot, right: Slot) -> SheetFace {
        SheetFace {
            sheet: 0,
            side: SheetSide::Front,
            left,
            right,
        }
    }

    #[test]
    fn test_blank_slot_has_no_placement() {
        let pages = vec![
            Page::new(DynamicImage::ImageRgb8(RgbImage::new(10, 14))),
            Page::blank(10, 14),
        ];
        let surface = compose(&face(Slot::inverted(1), Slot::upright(0)), &pages, 842.0, 595.0)
            .unwrap();
        assert_eq!(surface.placements.len(), 1);
        assert_eq!(surface.placements[0].source_page, 0);
        assert!(surface.placements[0].rect.x >= 421.0);
    }

    #[test]
    fn test_full_bleed_keeps_page_index() {
        let page = Page::new(DynamicImage::ImageRgb8(RgbImage::new(10, 14)));
        let surface = SurfacePage::full_bleed(&page, 7, 595.0, 842.0);
        assert_eq!(surface.placements.len(), 1);
        assert_eq!(surface.placements[0].source_page, 7);
        assert_eq!(surface.placements[0].rect, Rect::new(0.0, 0.0, 595.0, 842.0));
    }

    #[test]
    fn test_zero_area_surface_is_rejected() {
        let pages = vec![Page::blank(10, 14); 2];
        let result = compose(&face(Slot::upright(0), Slot::upright(1)), &pages, 0.0, 595.0);
        assert!(matches!(result, Err(BookletError::Geometry { .. })));
    }
}
