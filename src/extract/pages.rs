//! Standalone pages and section index pages.

use tracing::{debug, error, warn};

use super::{read_source, ExtractError};
use crate::config::{ResolvedConfig, Section};
use crate::content::{parse_frontmatter, strip_markup, truncate_chars, ContentRecord, MAX_CONTENT_CHARS};

/// Build a page record from an allow-listed file name and its source
pub fn page_record(file: &str, source: &str) -> ContentRecord {
    let parsed = parse_frontmatter(source);
    let fm = &parsed.frontmatter;
    let id = page_id(file);

    ContentRecord {
        id: format!("page-{}", id),
        title: fm.text("title").unwrap_or_else(|| id.to_string()),
        description: fm.text("description").unwrap_or_default(),
        content: truncate_chars(&strip_markup(parsed.body), MAX_CONTENT_CHARS),
        url: format!("/{}", id),
        category: "page".to_string(),
        tags: fm.joined("keywords"),
        date: None,
        post: None,
    }
}

/// Build a record for a section index page
pub fn section_record(section: &Section, source: &str) -> ContentRecord {
    let parsed = parse_frontmatter(source);
    let fm = &parsed.frontmatter;

    ContentRecord {
        id: format!("page-{}", section.id),
        title: fm.text("title").unwrap_or_else(|| section.title.clone()),
        description: fm.text("description").unwrap_or_default(),
        content: truncate_chars(&strip_markup(parsed.body), MAX_CONTENT_CHARS),
        url: section.url.clone(),
        category: section.category.clone(),
        tags: if section.keywords_as_tags {
            fm.joined("keywords")
        } else {
            String::new()
        },
        date: None,
        post: None,
    }
}

/// `about.mdx` -> `about`
fn page_id(file: &str) -> &str {
    file.strip_suffix(".mdx")
        .or_else(|| file.strip_suffix(".md"))
        .unwrap_or(file)
}

/// Collect allow-listed pages followed by section pages, in config order
pub async fn collect_pages(config: &ResolvedConfig) -> Vec<ContentRecord> {
    let mut pages = Vec::new();

    for file in &config.pages {
        let path = config.pages_dir.join(file);
        match read_source(&path).await {
            Ok(source) => pages.push(page_record(file, &source)),
            Err(ExtractError::NotFound(path)) => warn!("Page not found: {}", path.display()),
            Err(e) => error!("Error processing page {}: {}", file, e),
        }
    }

    for section in &config.sections {
        let path = config.root.join(&section.path);
        match read_source(&path).await {
            Ok(source) => pages.push(section_record(section, &source)),
            Err(ExtractError::NotFound(_)) => {
                debug!(section = %section.id, "Section page not present, skipping");
            }
            Err(e) => error!("Error processing section page {}: {}", section.id, e),
        }
    }

    pages
}
