pub mod booklet;
mod compose;
pub mod constants;
pub mod layout;
mod normalize;
mod options;
mod page;
pub mod render;
pub mod source;
mod split;
mod stats;
mod types;

pub use booklet::{
    Booklet, build_booklet, build_compressed_document, build_split_document, count_source_pages,
    load_pdf_pages, load_source, publish_pdf, run_booklet, run_compressed_document,
    run_split_document, save_pdf,
};
pub use compose::{Placement, SurfacePage, compose};
pub use layout::{
    BookletPlan, Sheet, SheetFace, SheetSide, Slot, plan_imposition, plan_imposition_with,
};
pub use normalize::normalize;
pub use options::*;
pub use page::{Page, dominant_size, pad_pages};
pub use source::RasterizedPages;
pub use split::{crop_to_fill, fill_window, split_spreads};
pub use stats::{calculate_statistics, split_page_count};
pub use types::*;
