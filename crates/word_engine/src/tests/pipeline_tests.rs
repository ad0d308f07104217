use super::*;

use shared::{ErrorCode, HexColor, Tone, WordRecord};

use crate::palette::palette_color;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn zen() -> LoadOutcome {
    Ok(WordCollection::new(vec![WordRecord::new(
        "Zen",
        "Calm awareness",
        date(2024, 1, 1),
    )]))
}

#[test]
fn daily_view_shows_the_word_for_today() {
    let DailyView::Word(word) = daily_view(&zen(), date(2024, 1, 1)) else {
        panic!("expected a word");
    };
    assert_eq!(word.word, "Zen");
    assert_eq!(word.definition, "Calm awareness");
    assert_eq!(word.background, palette_color(0));
    assert_eq!(word.tone, Tone::Light);
    assert_eq!(word.foreground.primary_text, "rgba(30, 30, 30, 0.95)");
}

#[test]
fn daily_view_reports_no_word_for_other_days() {
    let view = daily_view(&zen(), date(2024, 1, 2));
    assert_eq!(
        view,
        DailyView::NoWordToday {
            date: date(2024, 1, 2)
        }
    );
    assert_eq!(view.headline(), "No word for today");
    assert_eq!(view.code(), Some(ErrorCode::NoMatchForToday));
}

#[test]
fn explicit_color_drives_background_and_tone() {
    let outcome = Ok(WordCollection::new(vec![WordRecord::new(
        "Dusk",
        "Evening",
        date(2024, 6, 1),
    )
    .with_color(HexColor::parse("#112233").expect("color"))]));
    let DailyView::Word(word) = daily_view(&outcome, date(2024, 6, 1)) else {
        panic!("expected a word");
    };
    assert_eq!(word.background.as_str(), "#112233");
    assert_eq!(word.tone, Tone::Dark);
    assert_eq!(word.foreground.primary_text, "rgba(255, 255, 255, 0.95)");
}

#[test]
fn daily_fallback_color_matches_the_archive_card() {
    let outcome = Ok(WordCollection::new(vec![
        WordRecord::new("Later", "", date(2024, 1, 3)),
        WordRecord::new("Earlier", "", date(2024, 1, 1)),
        WordRecord::new("Middle", "", date(2024, 1, 2)),
    ]));
    let DailyView::Word(word) = daily_view(&outcome, date(2024, 1, 3)) else {
        panic!("expected a word");
    };
    let ArchiveView::Entries { entries } = archive_view(&outcome) else {
        panic!("expected entries");
    };
    let card = entries
        .iter()
        .find(|entry| entry.word == "Later")
        .expect("card");
    assert_eq!(word.background, card.color);
    assert_eq!(word.background, palette_color(2));
}

#[test]
fn empty_collection_is_an_empty_state_on_both_pages() {
    let outcome = Ok(WordCollection::default());
    assert_eq!(daily_view(&outcome, date(2024, 1, 1)), DailyView::Empty);
    assert_eq!(archive_view(&outcome), ArchiveView::Empty);
    assert_eq!(
        daily_view(&outcome, date(2024, 1, 1)).code(),
        Some(ErrorCode::EmptyCollection)
    );
    assert_eq!(
        archive_view(&outcome).empty_state_message(),
        Some("No words found in words.yaml")
    );
}

#[test]
fn load_failure_is_an_error_state_on_both_pages() {
    let outcome: LoadOutcome = Err(WordError::load("words.yaml", "connection refused"));
    let daily = daily_view(&outcome, date(2024, 1, 1));
    let DailyView::LoadError(report) = &daily else {
        panic!("expected load error");
    };
    assert_eq!(report.code, ErrorCode::LoadFailure);
    assert_eq!(daily.headline(), "Error loading words");
    assert_eq!(daily.detail(), "Please check the words.yaml file");

    let archive = archive_view(&outcome);
    assert!(matches!(archive, ArchiveView::LoadError(_)));
}

#[test]
fn daily_view_serializes_with_a_state_tag() {
    let json = serde_json::to_value(daily_view(&zen(), date(2024, 1, 1))).expect("json");
    assert_eq!(json["state"], "word");
    assert_eq!(json["background"], "#A8D8EA");
    assert_eq!(json["tone"], "light");

    let json = serde_json::to_value(daily_view(&zen(), date(2024, 1, 9))).expect("json");
    assert_eq!(json["state"], "no_word_today");
    assert_eq!(json["date"], "2024-01-09");
}
