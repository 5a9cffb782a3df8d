use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::models::domain::StoryDocument;

const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3/files";

/// The story document bundled with the binary. Used whenever no remote file
/// is configured or the remote load fails.
const BUNDLED_STORY: &str = include_str!("../../data/story.json");

/// Source of remote story documents. The Drive implementation is the real
/// one; tests substitute their own.
#[async_trait]
pub trait StoryFetcher: Send + Sync {
    async fn fetch(&self, file_id: &str) -> AppResult<StoryDocument>;
}

/// Fetches a publicly shared file from Google Drive and parses it as a
/// story document.
pub struct DriveFetcher {
    client: reqwest::Client,
}

impl DriveFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for DriveFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoryFetcher for DriveFetcher {
    async fn fetch(&self, file_id: &str) -> AppResult<StoryDocument> {
        let url = format!("{}/{}?alt=media", DRIVE_API_BASE, file_id);
        log::info!("Fetching story document from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Fetch(format!(
                "fetching file '{}' returned status {}",
                file_id,
                response.status()
            )));
        }

        let body = response.text().await?;
        StoryDocument::from_json(&body)
    }
}

pub struct StoryLoader {
    fetcher: Arc<dyn StoryFetcher>,
}

impl StoryLoader {
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(DriveFetcher::new()))
    }

    pub fn with_fetcher(fetcher: Arc<dyn StoryFetcher>) -> Self {
        Self { fetcher }
    }

    /// Loads the story document for a session. With no file id the bundled
    /// document is used directly; with one, the remote document is fetched
    /// and validated, and any failure falls back to the bundled document.
    /// A malformed remote document is never partially adopted.
    pub async fn load(&self, file_id: Option<&str>) -> StoryDocument {
        let Some(file_id) = file_id else {
            log::info!("No remote file configured, using bundled story");
            return Self::bundled();
        };

        match self.fetcher.fetch(file_id).await {
            Ok(document) => {
                log::info!("Loaded story '{}' from remote file", document.title);
                document
            }
            Err(err) => {
                log::warn!("Remote story load failed ({}), falling back to bundled story", err);
                Self::bundled()
            }
        }
    }

    pub fn bundled() -> StoryDocument {
        StoryDocument::from_json(BUNDLED_STORY).expect("bundled story document should be valid")
    }
}

impl Default for StoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_story_is_valid() {
        let document = StoryLoader::bundled();
        assert!(!document.pages.is_empty());
        assert!(document.questions.len() >= 4);
        assert!(document.ensure_valid().is_ok());
    }

    #[tokio::test]
    async fn test_load_without_file_id_uses_bundled() {
        let loader = StoryLoader::new();
        let document = loader.load(None).await;
        assert_eq!(document, StoryLoader::bundled());
    }
}
