//! Data model shared by the loader, the word engine and the site renderer.

pub mod domain;
pub mod error;
pub mod view;

pub use domain::{HexColor, WordCollection, WordRecord};
pub use error::{ErrorCode, ErrorReport, WordError};
pub use view::{ArchiveEntry, ArchiveView, DailyView, ForegroundPalette, Tone, WordOfTheDay};
