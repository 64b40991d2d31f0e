//! Top-level extraction driver.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use super::{blog, pages, ExtractError};
use crate::config::ResolvedConfig;
use crate::content::Corpus;

/// Runs page and blog collection over a content root
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ResolvedConfig,
    now: DateTime<Utc>,
}

impl Extractor {
    /// Create an extractor using the current time for the recent window
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            now: Utc::now(),
        }
    }

    /// Use a fixed reference time instead of the clock
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Collect all pages and blog posts.
    ///
    /// Per-file and per-section problems are logged and skipped; only an
    /// unreadable content root is an error.
    #[instrument(skip(self), fields(root = %self.config.root.display()))]
    pub async fn run(&self) -> Result<Corpus, ExtractError> {
        match tokio::fs::metadata(&self.config.root).await {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(ExtractError::RootNotFound(self.config.root.clone())),
        }

        let pages = pages::collect_pages(&self.config).await;
        let blog_posts =
            blog::collect_posts(&self.config.blog_dir, &self.config.blog, self.now).await;

        info!(
            "Extracted {} pages and {} blog posts",
            pages.len(),
            blog_posts.len()
        );

        Ok(Corpus { pages, blog_posts })
    }
}
