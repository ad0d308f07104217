use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loader::{load_words, source_for};
use serde::Serialize;
use shared::{ArchiveView, DailyView, ForegroundPalette, HexColor, Tone};
use site::{
    build::build_site,
    config::{load_settings, Settings},
    init_tracing,
};
use tracing::warn;
use word_engine::{
    archive_view, contrast_for, daily_view, duplicate_dates, luminance, today_local,
};

#[derive(Parser, Debug)]
#[command(name = "wordday", version, about = "Word of the day page tools")]
struct Cli {
    #[arg(long, global = true, help = "Word document path or http(s) URL")]
    source: Option<String>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the word for a date (defaults to today).
    Today {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List every word, oldest first, with its display color.
    Archive,
    /// Write index.html and previous.html.
    Build {
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Classify a hex color and print its foreground palette.
    Contrast { color: String },
    /// Validate the word document.
    Check,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ContrastReport {
    color: HexColor,
    luminance: f64,
    tone: Tone,
    foreground: ForegroundPalette,
}

#[derive(Serialize)]
struct CheckReport {
    source: String,
    records: usize,
    duplicate_dates: Vec<NaiveDate>,
}

fn print_json<T: Serialize>(ok: bool, data: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings()?;
    init_tracing(&settings.log_filter);
    if let Some(source) = cli.source {
        settings.source = source;
    }

    match cli.command {
        Command::Today { date } => today(&settings, date, cli.json).await,
        Command::Archive => archive(&settings, cli.json).await,
        Command::Build { out, date } => build(&settings, out, date, cli.json).await,
        Command::Contrast { color } => contrast(&color, cli.json),
        Command::Check => check(&settings, cli.json).await,
    }
}

async fn today(settings: &Settings, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let source = source_for(&settings.source, settings.http_timeout())?;
    let outcome = load_words(source.as_ref()).await;
    let view = daily_view(&outcome, date.unwrap_or_else(today_local));
    if json {
        return print_json(!matches!(view, DailyView::LoadError(_)), &view);
    }

    if let DailyView::Word(word) = &view {
        println!("word={}", word.word);
        println!("definition={}", word.definition);
        println!("date={}", word.date);
        println!("color={}", word.background);
        println!("tone={}", tone_name(word.tone));
    } else {
        if let Some(code) = view.code() {
            println!("status={}", code.as_str());
        }
        println!("{}: {}", view.headline(), view.detail());
    }
    Ok(())
}

async fn archive(settings: &Settings, json: bool) -> Result<()> {
    let source = source_for(&settings.source, settings.http_timeout())?;
    let outcome = load_words(source.as_ref()).await;
    let view = archive_view(&outcome);
    if json {
        return print_json(!matches!(view, ArchiveView::LoadError(_)), &view);
    }

    match &view {
        ArchiveView::Entries { entries } => {
            for entry in entries {
                println!(
                    "{}  {:<20} {}  {}",
                    entry.date, entry.word, entry.color, entry.definition
                );
            }
        }
        _ => {
            if let Some(code) = view.code() {
                println!("status={}", code.as_str());
            }
            if let Some(message) = view.empty_state_message() {
                println!("{message}");
            }
        }
    }
    Ok(())
}

async fn build(
    settings: &Settings,
    out: Option<PathBuf>,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let source = source_for(&settings.source, settings.http_timeout())?;
    let out_dir = out.unwrap_or_else(|| PathBuf::from(&settings.out_dir));
    let built = build_site(source.as_ref(), &out_dir, date.unwrap_or_else(today_local)).await?;
    if json {
        return print_json(
            built.load_error.is_none(),
            serde_json::json!({
                "daily_page": built.daily_page,
                "archive_page": built.archive_page,
                "load_error": built.load_error,
            }),
        );
    }

    println!("daily_page={}", built.daily_page.display());
    println!("archive_page={}", built.archive_page.display());
    if let Some(report) = &built.load_error {
        println!("load_error={}", report.message);
    }
    Ok(())
}

fn contrast(color: &str, json: bool) -> Result<()> {
    let color: HexColor = color.parse()?;
    let (tone, foreground) = contrast_for(&color);
    let report = ContrastReport {
        luminance: luminance(&color),
        color,
        tone,
        foreground,
    };
    if json {
        return print_json(true, report);
    }

    println!("color={}", report.color);
    println!("luminance={:.4}", report.luminance);
    println!("tone={}", tone_name(report.tone));
    println!("primary_text={}", report.foreground.primary_text);
    println!("secondary_text={}", report.foreground.secondary_text);
    println!("tertiary_text={}", report.foreground.tertiary_text);
    Ok(())
}

async fn check(settings: &Settings, json: bool) -> Result<()> {
    let source = source_for(&settings.source, settings.http_timeout())?;
    let collection = load_words(source.as_ref())
        .await
        .with_context(|| format!("word document '{}' is not valid", source.name()))?;
    let duplicates = duplicate_dates(&collection);
    for date in &duplicates {
        warn!(%date, "several words share this date; only the first is shown");
    }

    let report = CheckReport {
        source: source.name().to_string(),
        records: collection.len(),
        duplicate_dates: duplicates,
    };
    if json {
        return print_json(true, report);
    }

    println!("source={}", report.source);
    println!("records={}", report.records);
    println!("duplicate_dates={}", report.duplicate_dates.len());
    Ok(())
}

fn tone_name(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "light",
        Tone::Dark => "dark",
    }
}
