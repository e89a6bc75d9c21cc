//! Two-up paired imposition
//!
//! Pages are paired symmetrically from the outside in: output page `k` shows
//! `[P-1-k, k]` (left, right). Every odd output page is printed upside down
//! in both slots so that a stack of duplex sheets folds correctly.
//!
//! For 8 pages:
//! ```text
//! out 0: [8, 1]
//! out 1: [7↓, 2↓]
//! out 2: [6, 3]
//! out 3: [5↓, 4↓]
//! ```
//!
//! Output pages are grouped pairwise onto physical sheets (even = front,
//! odd = back). When the number of output pages is odd the last sheet has no
//! back side.

use crate::constants::PAGES_PER_FACE;
use crate::types::RotationRule;

use super::{Sheet, SheetFace, SheetSide, Slot};

pub(crate) fn paired_sheets(padded_count: usize, rule: RotationRule) -> Vec<Sheet> {
    debug_assert_eq!(padded_count % PAGES_PER_FACE, 0);

    let face_count = padded_count / PAGES_PER_FACE;
    let faces: Vec<(usize, usize, bool)> = (0..face_count)
        .map(|k| {
            let rotated = rule == RotationRule::InvertOuter && k % 2 == 1;
            (padded_count - 1 - k, k, rotated)
        })
        .collect();

    faces
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| {
            let face = |side, &(left, right, rotated): &(usize, usize, bool)| SheetFace {
                sheet: index,
                side,
                left: Slot {
                    page: left,
                    rotated,
                },
                right: Slot {
                    page: right,
                    rotated,
                },
            };
            Sheet {
                index,
                front: face(SheetSide::Front, &pair[0]),
                back: pair.get(1).map(|back| face(SheetSide::Back, back)),
            }
        })
        .collect()
}
