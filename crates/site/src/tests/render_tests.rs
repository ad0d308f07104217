use super::*;

use chrono::NaiveDate;
use shared::{ErrorCode, ErrorReport, WordCollection, WordRecord};
use word_engine::{archive_view, daily_view};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        html_escape("<b>\"a\" & 'b'</b>"),
        "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
    );
    assert_eq!(html_escape("plain"), "plain");
}

#[test]
fn daily_page_paints_word_and_contrast_colors() {
    let outcome = Ok(WordCollection::new(vec![WordRecord::new(
        "Zen",
        "Calm <awareness>",
        date(2024, 1, 1),
    )
    .with_color(HexColor::parse("#112233").expect("color"))]));
    let html = render_daily_page(&daily_view(&outcome, date(2024, 1, 1)));

    assert!(html.contains(">Zen</h1>"));
    assert!(html.contains("Calm &lt;awareness&gt;"));
    assert!(html.contains("background-color: #112233;"));
    assert!(html.contains("color: rgba(255, 255, 255, 0.95);"));
    assert!(html.contains("<code id=\"hexCode\""));
    assert!(html.contains(">#112233</code>"));
    assert!(html.contains("border-color: rgba(255, 255, 255, 0.3);"));
}

#[test]
fn daily_page_without_a_word_shows_the_message_and_no_hex_code() {
    let outcome = Ok(WordCollection::new(vec![WordRecord::new(
        "Zen",
        "Calm",
        date(2024, 1, 1),
    )]));
    let html = render_daily_page(&daily_view(&outcome, date(2024, 1, 2)));

    assert!(html.contains("No word for today"));
    assert!(html.contains("Please add a word with today&#39;s date to words.yaml"));
    assert!(html.contains("background-color: #E8F4F8;"));
    assert!(!html.contains("hexCode"));
}

#[test]
fn daily_page_reports_load_errors() {
    let view = DailyView::LoadError(ErrorReport::new(ErrorCode::LoadFailure, "boom"));
    let html = render_daily_page(&view);
    assert!(html.contains("Error loading words"));
    assert!(html.contains("Please check the words.yaml file"));
}

#[test]
fn archive_page_lists_cards_oldest_first_with_tints() {
    let outcome = Ok(WordCollection::new(vec![
        WordRecord::new("Second", "two", date(2024, 1, 2)),
        WordRecord::new("First", "one", date(2024, 1, 1)),
    ]));
    let html = render_archive_page(&archive_view(&outcome));

    let first = html.find("<h2>First</h2>").expect("first card");
    let second = html.find("<h2>Second</h2>").expect("second card");
    assert!(first < second);
    assert!(html.contains("background: #A8D8EA40; border-color: #A8D8EA60;"));
    assert!(html.contains("January 1, 2024"));
    assert!(html.contains("background-color: #E8F4F8;"));
}

#[test]
fn archive_page_empty_and_error_states() {
    let html = render_archive_page(&ArchiveView::Empty);
    assert!(html.contains("<div class=\"empty-state\">No words found in words.yaml</div>"));

    let html = render_archive_page(&ArchiveView::LoadError(ErrorReport::new(
        ErrorCode::LoadFailure,
        "boom",
    )));
    assert!(html.contains("Error loading words. Please check the words.yaml file."));
    assert!(!html.contains("word-card"));
}
