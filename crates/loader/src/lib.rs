use std::{path::PathBuf, sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{WordCollection, WordError, WordRecord};
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait WordSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<String, WordError>;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl WordSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<String, WordError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| WordError::load(&self.name, err))
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    http: Client,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, WordError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| WordError::load(url.as_str(), err))?;
        Ok(Self { url, http })
    }
}

#[async_trait]
impl WordSource for HttpSource {
    fn name(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch(&self) -> Result<String, WordError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| WordError::load(self.name(), err))?
            .error_for_status()
            .map_err(|err| WordError::load(self.name(), err))?;
        response
            .text()
            .await
            .map_err(|err| WordError::load(self.name(), err))
    }
}

pub fn source_for(location: &str, timeout: Duration) -> Result<Arc<dyn WordSource>, WordError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(WordError::load(location, "word source location is empty"));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        let url = Url::parse(location).map_err(|err| WordError::load(location, err))?;
        return Ok(Arc::new(HttpSource::new(url, timeout)?));
    }

    Ok(Arc::new(FileSource::new(location)))
}

#[derive(Debug, Deserialize)]
struct WordDocument {
    #[serde(default)]
    words: Option<Vec<WordRecord>>,
}

/// Parses a YAML word document. A blank document, a missing `words` key and
/// `words: null` all produce an empty collection.
pub fn parse_document(source_name: &str, text: &str) -> Result<WordCollection, WordError> {
    if text.trim().is_empty() {
        return Ok(WordCollection::default());
    }

    let document: WordDocument =
        serde_yaml::from_str(text).map_err(|err| WordError::parse(source_name, err))?;
    Ok(WordCollection::new(document.words.unwrap_or_default()))
}

/// Fetches and parses the document once. Failures are not retried.
pub async fn load_words(source: &dyn WordSource) -> Result<WordCollection, WordError> {
    let text = source.fetch().await?;
    let collection = parse_document(source.name(), &text)?;
    if collection.is_empty() {
        warn!(source = source.name(), "word document contains no words");
    } else {
        info!(
            source = source.name(),
            records = collection.len(),
            "loaded word document"
        );
    }
    Ok(collection)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
