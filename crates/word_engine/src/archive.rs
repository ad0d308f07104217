use chrono::NaiveDate;
use shared::{ArchiveEntry, WordCollection, WordRecord};

use crate::palette::display_color;

/// Records in ascending date order. Equal dates keep their input order.
pub fn sorted_by_date(collection: &WordCollection) -> Vec<&WordRecord> {
    let mut records: Vec<&WordRecord> = collection.iter().collect();
    records.sort_by_key(|record| record.date);
    records
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn sort_archive(collection: &WordCollection) -> Vec<ArchiveEntry> {
    sorted_by_date(collection)
        .into_iter()
        .enumerate()
        .map(|(position, record)| ArchiveEntry {
            word: record.word.clone(),
            definition: record.definition.clone(),
            date: record.date,
            formatted_date: format_long_date(record.date),
            color: display_color(record, position),
        })
        .collect()
}

/// Dates carried by more than one record, ascending. Only the first record of
/// each such date can ever be selected as the word of the day.
pub fn duplicate_dates(collection: &WordCollection) -> Vec<NaiveDate> {
    let sorted = sorted_by_date(collection);
    let mut dates: Vec<NaiveDate> = sorted
        .windows(2)
        .filter(|pair| pair[0].date == pair[1].date)
        .map(|pair| pair[0].date)
        .collect();
    dates.dedup();
    dates
}

#[cfg(test)]
#[path = "tests/archive_tests.rs"]
mod tests;
