//! HTML for the daily and archive pages.
//!
//! Rendering is pure: it only reads the view state it is given.

use std::fmt::Write as _;

use shared::{ArchiveView, DailyView, ForegroundPalette, HexColor};
use word_engine::contrast_for;

pub const DAILY_PAGE: &str = "index.html";
pub const ARCHIVE_PAGE: &str = "previous.html";

const STYLE: &str = "\
*{box-sizing:border-box;margin:0;padding:0}\
body{font-family:Georgia,'Times New Roman',serif}\
section{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:2rem;text-align:center}\
#wordDisplay{font-size:4rem;font-weight:normal}\
#definitionDisplay{font-size:1.5rem;max-width:40rem;line-height:1.6}\
.hint,.color-label{font-size:.9rem;margin-top:1.5rem}\
.footer{margin-top:2rem;padding-top:1rem;border-top:1px solid;display:flex;gap:.75rem;align-items:center}\
#hexCode{font-family:monospace;padding:.25rem .5rem;border-radius:4px}\
.button{padding:.4rem .9rem;border:1px solid;border-radius:4px;text-decoration:none}\
#wordsGrid{display:grid;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr));gap:1rem;padding:2rem}\
.word-card{padding:1.25rem;border:2px solid;border-radius:8px}\
.word-card .date{font-size:.85rem;margin-top:.75rem;opacity:.7}\
.empty-state{padding:3rem;text-align:center}";

pub fn neutral_background() -> HexColor {
    HexColor::from_rgb(0xE8, 0xF4, 0xF8)
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        html_escape(title)
    )
}

pub fn render_daily_page(view: &DailyView) -> String {
    let (background, foreground, hex_code) = match view {
        DailyView::Word(word) => (
            word.background.css(),
            word.foreground,
            Some(word.background.as_str()),
        ),
        _ => {
            let neutral = neutral_background();
            let (_, foreground) = contrast_for(&neutral);
            (neutral.css(), foreground, None)
        }
    };
    let ForegroundPalette {
        primary_text,
        secondary_text,
        tertiary_text,
        border,
        hex_chip_background,
        button_background,
        button_border,
    } = foreground;

    let mut body = String::new();
    let _ = write!(
        body,
        "<section id=\"wordSection\" style=\"background-color: {background};\">\n\
         <h1 id=\"wordDisplay\" style=\"color: {primary_text};\">{}</h1>\n\
         <p class=\"hint\" style=\"color: {tertiary_text};\">Scroll down for the meaning</p>\n\
         </section>\n\
         <section id=\"meaningSection\" style=\"background-color: {background};\">\n\
         <p id=\"definitionDisplay\" style=\"color: {secondary_text};\">{}</p>\n\
         <div class=\"footer\" style=\"border-color: {border};\">\n",
        html_escape(view.headline()),
        html_escape(view.detail()),
    );
    if let Some(hex_code) = hex_code {
        let _ = write!(
            body,
            "<span class=\"color-label\" style=\"color: {tertiary_text};\">Today's color</span>\n\
             <code id=\"hexCode\" style=\"color: {primary_text}; background: {hex_chip_background};\">{}</code>\n",
            html_escape(hex_code),
        );
    }
    let _ = write!(
        body,
        "<a class=\"button\" href=\"previous.html\" style=\"color: {primary_text}; \
         background: {button_background}; border-color: {button_border};\">Previous words</a>\n\
         </div>\n</section>\n"
    );

    page("Word of the Day", &body)
}

pub fn render_archive_page(view: &ArchiveView) -> String {
    let mut body = format!(
        "<main id=\"previousContainer\" style=\"background-color: {};\">\n\
         <h1 class=\"empty-state\">Previous Words</h1>\n\
         <div id=\"wordsGrid\">\n",
        neutral_background().css()
    );

    match view {
        ArchiveView::Entries { entries } => {
            for entry in entries {
                let _ = write!(
                    body,
                    "<div class=\"word-card\" style=\"background: {}; border-color: {};\">\n\
                     <h2>{}</h2>\n<p class=\"definition\">{}</p>\n<p class=\"date\">{}</p>\n</div>\n",
                    entry.color.with_alpha(0x40),
                    entry.color.with_alpha(0x60),
                    html_escape(&entry.word),
                    html_escape(&entry.definition),
                    html_escape(&entry.formatted_date),
                );
            }
        }
        _ => {
            let message = view.empty_state_message().unwrap_or_default();
            let _ = writeln!(body, "<div class=\"empty-state\">{}</div>", html_escape(message));
        }
    }

    body.push_str("</div>\n<p class=\"empty-state\"><a href=\"index.html\">Back to today</a></p>\n</main>\n");
    page("Previous Words", &body)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
