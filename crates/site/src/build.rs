use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use loader::{load_words, WordSource};
use shared::ErrorReport;
use tracing::{info, warn};
use word_engine::{archive_view, daily_view, LoadOutcome};

use crate::render::{render_archive_page, render_daily_page, ARCHIVE_PAGE, DAILY_PAGE};

#[derive(Debug, Clone)]
pub struct BuiltSite {
    pub daily_page: PathBuf,
    pub archive_page: PathBuf,
    /// Set when the document could not be loaded; the pages show the error state.
    pub load_error: Option<ErrorReport>,
}

pub struct RenderedPages {
    pub daily: String,
    pub archive: String,
}

pub fn render_pages(outcome: &LoadOutcome, today: NaiveDate) -> RenderedPages {
    RenderedPages {
        daily: render_daily_page(&daily_view(outcome, today)),
        archive: render_archive_page(&archive_view(outcome)),
    }
}

pub async fn build_site(
    source: &dyn WordSource,
    out_dir: &Path,
    today: NaiveDate,
) -> anyhow::Result<BuiltSite> {
    let outcome = load_words(source).await;
    let pages = render_pages(&outcome, today);

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;

    let daily_page = out_dir.join(DAILY_PAGE);
    let archive_page = out_dir.join(ARCHIVE_PAGE);
    tokio::fs::write(&daily_page, pages.daily)
        .await
        .with_context(|| format!("failed to write '{}'", daily_page.display()))?;
    tokio::fs::write(&archive_page, pages.archive)
        .await
        .with_context(|| format!("failed to write '{}'", archive_page.display()))?;

    let load_error = outcome.as_ref().err().map(ErrorReport::from);
    if let Some(report) = &load_error {
        warn!(source = source.name(), error = %report.message, "built pages in load error state");
    }
    info!(out_dir = %out_dir.display(), %today, "site built");

    Ok(BuiltSite {
        daily_page,
        archive_page,
        load_error,
    })
}
