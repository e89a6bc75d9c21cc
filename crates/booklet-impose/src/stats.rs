use crate::layout::{BookletPlan, plan_imposition_with};
use crate::options::BookletOptions;
use crate::types::*;

/// Calculate statistics for a booklet without rendering anything
pub fn calculate_statistics(
    source_pages: usize,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    if source_pages == 0 {
        return Err(BookletError::EmptySource);
    }

    let imposed_pages = if options.split_spreads {
        split_page_count(source_pages)
    } else {
        source_pages
    };

    let plan = plan_imposition_with(imposed_pages, options.imposition_mode, options.rotation_rule)?;
    Ok(plan_statistics(source_pages, &plan, options))
}

/// Pages produced by splitting `spreads` spreads (the cover yields one page)
pub fn split_page_count(spreads: usize) -> usize {
    match spreads {
        0 => 0,
        n => 1 + 2 * (n - 1),
    }
}

pub(crate) fn plan_statistics(
    source_pages: usize,
    plan: &BookletPlan,
    options: &BookletOptions,
) -> BookletStatistics {
    BookletStatistics {
        source_pages,
        imposed_pages: plan.page_count,
        blank_pages_added: plan.blank_pages(),
        sheets: plan.sheet_count(),
        output_pages: plan.output_page_count(),
        format: booklet_format(options),
        duplex_hint: duplex_hint(options.rotation_rule).to_string(),
    }
}

/// Statistics for the split-pages document
pub(crate) fn split_statistics(source_pages: usize, options: &BookletOptions) -> BookletStatistics {
    let pages = split_page_count(source_pages);
    BookletStatistics {
        source_pages,
        imposed_pages: pages,
        blank_pages_added: 0,
        sheets: pages,
        output_pages: pages,
        format: format!(
            "{} portrait, one image/text per page",
            options.split_page_size.label()
        ),
        duplex_hint: "Single-sided".to_string(),
    }
}

/// Statistics for the compressed document
pub(crate) fn compressed_statistics(
    source_pages: usize,
    options: &BookletOptions,
) -> BookletStatistics {
    BookletStatistics {
        source_pages,
        imposed_pages: source_pages,
        blank_pages_added: 0,
        sheets: source_pages,
        output_pages: source_pages,
        format: format!("Original page size, JPEG quality {}", options.jpeg_quality),
        duplex_hint: "Single-sided".to_string(),
    }
}

fn booklet_format(options: &BookletOptions) -> String {
    let orientation = match options.sheet_orientation {
        Orientation::Landscape => "landscape",
        Orientation::Portrait => "portrait",
    };
    let paper = options.sheet_size.label();
    match options.imposition_mode {
        ImpositionMode::FourUpSaddleStitch => {
            format!("{} {} {}", paper, orientation, options.imposition_mode.label())
        }
        ImpositionMode::TwoUpPaired => {
            format!("{} {}, {}", paper, orientation, options.imposition_mode.label())
        }
    }
}

fn duplex_hint(rule: RotationRule) -> &'static str {
    match rule {
        RotationRule::InvertOuter => "Duplex - flip on long edge",
        RotationRule::Upright => "Duplex - flip on short edge",
    }
}
