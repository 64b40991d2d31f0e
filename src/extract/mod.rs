//! Content collection.
//!
//! This module contains:
//! - pages: Page allow-list and section index pages
//! - blog: Blog post enumeration, slug and date derivation
//! - extractor: Top-level driver producing the [`Corpus`](crate::content::Corpus)
//!
//! Failures are handled in three tiers. A single file that cannot be read
//! is logged and skipped. A whole section that cannot be listed (the blog
//! directory) is logged and yields no records. Only a missing content root
//! is fatal.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod blog;
pub mod extractor;
pub mod pages;

pub use blog::{collect_posts, derive_slug, filename_date, post_record};
pub use extractor::Extractor;
pub use pages::{collect_pages, page_record, section_record};

/// Errors raised while collecting content
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Content root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a UTF-8 source file
pub(crate) async fn read_source(path: &Path) -> Result<String, ExtractError> {
    tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ExtractError::NotFound(path.to_path_buf())
        } else {
            ExtractError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
