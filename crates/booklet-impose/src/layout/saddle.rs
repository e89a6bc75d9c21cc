//! Four-up saddle-stitch imposition
//!
//! Every sheet carries four logical pages, two per side. For a booklet of
//! `P` padded pages, sheet `s` holds:
//!
//! ```text
//!            left            right
//! Front:  [P-1-2s ↓]       [2s]
//! Back:   [2s+1]           [P-2-2s ↓]
//! ```
//!
//! `↓` marks slots printed upside down. For 12 pages:
//! - Sheet 0: front [12↓, 1], back [2, 11↓]
//! - Sheet 1: front [10↓, 3], back [4, 9↓]
//! - Sheet 2: front [8↓, 5], back [6, 7↓]
//!
//! Reading front-right then back-left gives consecutive pages from the start
//! of the booklet; front-left and back-right give consecutive pages from the
//! end. The descending-index slot on each face is the one rotated.

use crate::constants::PAGES_PER_SHEET;
use crate::types::RotationRule;

use super::{Sheet, SheetFace, SheetSide, Slot};

/// Build the saddle-stitch sheets for an already padded page count.
pub(crate) fn saddle_stitch_sheets(padded_count: usize, rule: RotationRule) -> Vec<Sheet> {
    debug_assert_eq!(padded_count % PAGES_PER_SHEET, 0);

    let invert = rule == RotationRule::InvertOuter;
    let sheet_count = padded_count / PAGES_PER_SHEET;

    (0..sheet_count)
        .map(|s| {
            let front = SheetFace {
                sheet: s,
                side: SheetSide::Front,
                left: Slot {
                    page: padded_count - 1 - 2 * s,
                    rotated: invert,
                },
                right: Slot::upright(2 * s),
            };
            let back = SheetFace {
                sheet: s,
                side: SheetSide::Back,
                left: Slot::upright(2 * s + 1),
                right: Slot {
                    page: padded_count - 2 - 2 * s,
                    rotated: invert,
                },
            };
            Sheet {
                index: s,
                front,
                back: Some(back),
            }
        })
        .collect()
}
