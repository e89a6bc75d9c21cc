//! Layout data types for imposition
//!
//! These types are the output of the planner: page indices and rotation
//! flags only, no pixels.

use crate::types::ImpositionMode;

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

/// One half of a sheet face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// 0-based index into the padded page sequence
    pub page: usize,
    /// Whether this slot is printed rotated 180°
    pub rotated: bool,
}

impl Slot {
    pub fn upright(page: usize) -> Self {
        Self {
            page,
            rotated: false,
        }
    }

    pub fn inverted(page: usize) -> Self {
        Self {
            page,
            rotated: true,
        }
    }
}

/// One printed side: two slots side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetFace {
    /// Index of the sheet this face belongs to
    pub sheet: usize,
    pub side: SheetSide,
    pub left: Slot,
    pub right: Slot,
}

impl SheetFace {
    pub fn slots(&self) -> [Slot; 2] {
        [self.left, self.right]
    }
}

/// One physical piece of paper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub index: usize,
    pub front: SheetFace,
    /// Always present in saddle-stitch mode; the last paired sheet may be single-sided
    pub back: Option<SheetFace>,
}

impl Sheet {
    /// Faces in print order (front, then back)
    pub fn faces(&self) -> impl Iterator<Item = &SheetFace> {
        std::iter::once(&self.front).chain(self.back.as_ref())
    }

    /// All slots on this sheet in print order
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.faces().flat_map(|face| face.slots())
    }
}

/// Complete imposition for a booklet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookletPlan {
    pub mode: ImpositionMode,
    /// Pages supplied by the caller
    pub page_count: usize,
    /// Page count after padding with blank pages
    pub padded_count: usize,
    pub sheets: Vec<Sheet>,
}

impl BookletPlan {
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Blank pages appended to reach `padded_count`
    pub fn blank_pages(&self) -> usize {
        self.padded_count - self.page_count
    }

    /// Whether a slot refers to a padding page
    pub fn is_padding(&self, page: usize) -> bool {
        page >= self.page_count
    }

    /// All faces in output order
    pub fn faces(&self) -> impl Iterator<Item = &SheetFace> {
        self.sheets.iter().flat_map(|sheet| sheet.faces())
    }

    /// Number of pages in the imposed output document (one per face)
    pub fn output_page_count(&self) -> usize {
        self.faces().count()
    }
}

/// A rectangular area in points (PDF coordinates, origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether `other` lies inside this rect (with a small tolerance for rounding)
    pub fn contains(&self, other: &Rect) -> bool {
        const EPSILON: f32 = 0.01;
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.top() <= self.top() + EPSILON
    }
}
