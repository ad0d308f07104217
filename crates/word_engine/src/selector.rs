use chrono::{Local, NaiveDate};
use shared::{WordCollection, WordRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected<'a> {
    pub record: &'a WordRecord,
    /// Position of the record once the collection is sorted by date.
    pub position: usize,
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Finds the first record dated exactly `today`. There is no fallback to a
/// nearby date.
pub fn select_for_date(today: NaiveDate, collection: &WordCollection) -> Option<Selected<'_>> {
    let record = collection.iter().find(|record| record.date == today)?;
    // The date sort is stable, so the first match lands right after every
    // earlier-dated record.
    let position = collection.iter().filter(|record| record.date < today).count();
    Some(Selected { record, position })
}
