//! Turns a load result into the view state for each page.

use chrono::NaiveDate;
use shared::{ArchiveView, DailyView, ErrorReport, WordCollection, WordError, WordOfTheDay};
use tracing::{error, info};

use crate::{
    archive::sort_archive, contrast::contrast_for, palette::display_color,
    selector::select_for_date,
};

pub type LoadOutcome = Result<WordCollection, WordError>;

pub fn daily_view(outcome: &LoadOutcome, today: NaiveDate) -> DailyView {
    let collection = match outcome {
        Ok(collection) => collection,
        Err(err) => {
            error!(error = %err, "daily page: failed to load words");
            return DailyView::LoadError(ErrorReport::from(err));
        }
    };

    if collection.is_empty() {
        return DailyView::Empty;
    }

    let Some(selected) = select_for_date(today, collection) else {
        info!(%today, records = collection.len(), "daily page: no word for today");
        return DailyView::NoWordToday { date: today };
    };

    let background = display_color(selected.record, selected.position);
    let (tone, foreground) = contrast_for(&background);
    DailyView::Word(WordOfTheDay {
        word: selected.record.word.clone(),
        definition: selected.record.definition.clone(),
        date: selected.record.date,
        background,
        tone,
        foreground,
    })
}

pub fn archive_view(outcome: &LoadOutcome) -> ArchiveView {
    match outcome {
        Ok(collection) if collection.is_empty() => ArchiveView::Empty,
        Ok(collection) => ArchiveView::Entries {
            entries: sort_archive(collection),
        },
        Err(err) => {
            error!(error = %err, "archive page: failed to load words");
            ArchiveView::LoadError(ErrorReport::from(err))
        }
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
