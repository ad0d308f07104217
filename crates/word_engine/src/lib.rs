//! Date selection, archive ordering and color derivation for the word pages.

pub mod archive;
pub mod contrast;
pub mod palette;
pub mod pipeline;
pub mod selector;

pub use archive::{duplicate_dates, format_long_date, sort_archive, sorted_by_date};
pub use contrast::{classify, contrast_for, foreground_for, luminance};
pub use palette::{display_color, palette_color, PALETTE};
pub use pipeline::{archive_view, daily_view, LoadOutcome};
pub use selector::{select_for_date, today_local, Selected};
