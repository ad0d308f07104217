use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "wordday.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub bind_addr: String,
    pub out_dir: String,
    pub http_timeout_seconds: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: "words.yaml".into(),
            bind_addr: "127.0.0.1:8080".into(),
            out_dir: "./site".into(),
            http_timeout_seconds: 10,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    source: Option<String>,
    bind_addr: Option<String>,
    out_dir: Option<String>,
    http_timeout_seconds: Option<u64>,
    log_filter: Option<String>,
}

/// Defaults, then `wordday.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    let path = Path::new(SETTINGS_FILE);
    if path.exists() {
        apply_file(&mut settings, path)?;
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;

    if let Some(v) = file_cfg.source {
        settings.source = v;
    }
    if let Some(v) = file_cfg.bind_addr {
        settings.bind_addr = v;
    }
    if let Some(v) = file_cfg.out_dir {
        settings.out_dir = v;
    }
    if let Some(v) = file_cfg.http_timeout_seconds {
        anyhow::ensure!(
            v > 0,
            "http_timeout_seconds in '{}' must be at least 1",
            path.display()
        );
        settings.http_timeout_seconds = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

/// Environment overrides. `APP__*` names win over the `WORDDAY_*` names.
/// Unparseable or zero timeouts are ignored.
pub fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("WORDDAY_SOURCE") {
        settings.source = v;
    }
    if let Some(v) = var("APP__SOURCE") {
        settings.source = v;
    }

    if let Some(v) = var("WORDDAY_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = var("WORDDAY_OUT_DIR") {
        settings.out_dir = v;
    }
    if let Some(v) = var("APP__OUT_DIR") {
        settings.out_dir = v;
    }

    if let Some(v) = var("APP__HTTP_TIMEOUT_SECONDS") {
        match v.parse::<u64>() {
            Ok(parsed) if parsed > 0 => settings.http_timeout_seconds = parsed,
            _ => {}
        }
    }

    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
