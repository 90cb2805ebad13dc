use crate::model::{ListingsData, SnapshotError};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<String, SnapshotError>;
}

/// Reads the snapshot from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for FileSource {
    async fn fetch(&self) -> Result<String, SnapshotError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Fetches the snapshot with a single GET request.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent("PrusaSniperBot/0.1")
            .build()
            .unwrap();

        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<String, SnapshotError> {
        let response = match timeout(Duration::from_secs(10), self.client.get(&self.url).send()).await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => return Err(SnapshotError::Http(e.to_string())),
            Err(_) => return Err(SnapshotError::Timeout),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SnapshotError::InvalidResponse(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SnapshotError::Http(e.to_string()))
    }
}

/// Picks the source type from the configured location string.
pub fn for_location(location: &str) -> Box<dyn SnapshotSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

pub fn parse_snapshot(raw: &str) -> Result<ListingsData, SnapshotError> {
    Ok(serde_json::from_str(raw)?)
}
