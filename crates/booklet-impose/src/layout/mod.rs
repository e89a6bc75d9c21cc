//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations for the booklet:
//! - Sheet planning (which page goes in which slot, and which slots are inverted)
//! - Content placement (fitting pages into sheet halves)

mod paired;
mod placement;
mod saddle;
mod types;

pub use placement::*;
pub use types::*;

use crate::types::{BookletError, ImpositionMode, Result, RotationRule};

/// Plan the imposition of `page_count` pages using the default rotation rule.
pub fn plan_imposition(page_count: usize, mode: ImpositionMode) -> Result<BookletPlan> {
    plan_imposition_with(page_count, mode, RotationRule::default())
}

/// Plan the imposition of `page_count` pages.
///
/// The page count is padded up to the mode's page multiple; padding slots
/// are the indices `page_count..padded_count`.
pub fn plan_imposition_with(
    page_count: usize,
    mode: ImpositionMode,
    rule: RotationRule,
) -> Result<BookletPlan> {
    if page_count == 0 {
        return Err(BookletError::NoPages);
    }

    let padded_count = padded_page_count(page_count, mode);
    let sheets = match mode {
        ImpositionMode::FourUpSaddleStitch => saddle::saddle_stitch_sheets(padded_count, rule),
        ImpositionMode::TwoUpPaired => paired::paired_sheets(padded_count, rule),
    };

    log::debug!(
        "Planned {} pages -> {} padded, {} sheets ({:?})",
        page_count,
        padded_count,
        sheets.len(),
        mode
    );

    Ok(BookletPlan {
        mode,
        page_count,
        padded_count,
        sheets,
    })
}

/// Round `page_count` up to the mode's page multiple
pub fn padded_page_count(page_count: usize, mode: ImpositionMode) -> usize {
    let multiple = mode.page_multiple();
    page_count.div_ceil(multiple) * multiple
}
