//! Blog post collection.
//!
//! Posts live flat in the blog directory and follow the
//! `YYYY-MM-DD-title.md(x)` naming convention. The date comes from the
//! file name; the url slug comes from frontmatter `slug` or, failing that,
//! from the file name.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use glob::Pattern;
use regex::Regex;
use tracing::{debug, error, warn};

use super::{read_source, ExtractError};
use crate::config::BlogSettings;
use crate::content::record::{reading_time_minutes, word_count};
use crate::content::{
    external_links, parse_frontmatter, split_code_fences, strip_markup, truncate_chars,
    ContentRecord, PostMetadata, MAX_CONTENT_CHARS,
};

static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("valid date regex"));

static SLUG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}-").expect("valid date regex"));

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.mdx?$").expect("valid extension regex"));

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// `YYYY-MM-DD` prefix of a post file name, if any
pub fn filename_date(name: &str) -> Option<&str> {
    DATE_PREFIX_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Derive a url slug from a post file name.
///
/// `2022-12-21-Load Testing.mdx` -> `load-testing`
pub fn derive_slug(name: &str) -> String {
    let stem = SLUG_DATE_RE.replace(name, "");
    let stem = EXTENSION_RE.replace(&stem, "").to_lowercase();
    NON_SLUG_RE
        .replace_all(&stem, "-")
        .trim_matches('-')
        .to_string()
}

/// Whether a post dated `date` falls within `days` days before `now`.
///
/// Unparseable dates are never recent. A window reaching past the range
/// chrono can represent has no cutoff, so every dated post is recent.
pub fn is_recent(date: &str, now: DateTime<Utc>, days: i64) -> bool {
    let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return false;
    };
    let Some(midnight) = day.and_hms_opt(0, 0, 0) else {
        return false;
    };
    match Duration::try_days(days).and_then(|window| now.checked_sub_signed(window)) {
        Some(cutoff) => midnight.and_utc() >= cutoff,
        None => true,
    }
}

/// Build a blog record from a post's file name and source
pub fn post_record(name: &str, source: &str, now: DateTime<Utc>, recent_days: i64) -> ContentRecord {
    let parsed = parse_frontmatter(source);
    let fm = &parsed.frontmatter;

    let date = filename_date(name);
    let slug = fm.text("slug").unwrap_or_else(|| derive_slug(name));

    // Fences go first so `<` inside code cannot pair with a later `>`
    let (prose, blocks) = split_code_fences(parsed.body);
    let stripped = strip_markup(&prose);
    let words = word_count(&stripped);

    let code_languages: Vec<String> = blocks.into_iter().map(|block| block.language).collect();
    let references: Vec<String> = external_links(parsed.body)
        .into_iter()
        .map(|link| link.text)
        .collect();

    ContentRecord {
        id: format!("blog-{}", slug),
        title: fm.text("title").unwrap_or_else(|| slug.clone()),
        description: fm.text("description").unwrap_or_default(),
        content: truncate_chars(&stripped, MAX_CONTENT_CHARS),
        url: format!("/blog/{}", slug),
        category: "blog".to_string(),
        tags: fm.joined("tags"),
        date: date.map(|d| format!("{}T00:00:00Z", d)),
        post: Some(PostMetadata {
            recent: date.is_some_and(|d| is_recent(d, now, recent_days)),
            metadata: PostMetadata::summarize(&code_languages, &references),
            word_count: words,
            reading_time_minutes: reading_time_minutes(words),
            code_languages,
        }),
    }
}

/// A post file found in the blog directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    pub name: String,
    pub path: PathBuf,
}

/// List post files, newest first.
///
/// Only regular `.md`/`.mdx` files are returned. Names starting with `_`
/// are always dropped, as are names matching a configured exclude pattern.
/// Undated files sort last, ties by name.
pub async fn list_posts(dir: &Path, settings: &BlogSettings) -> Result<Vec<PostFile>, ExtractError> {
    let exclude: Vec<Pattern> = settings
        .exclude
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Ignoring invalid exclude pattern {:?}: {}", p, e);
                None
            }
        })
        .collect();

    let list_err = |source: std::io::Error| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ExtractError::NotFound(dir.to_path_buf())
        } else {
            ExtractError::ListDir {
                path: dir.to_path_buf(),
                source,
            }
        }
    };

    let mut posts = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;

    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };

        if !(name.ends_with(".mdx") || name.ends_with(".md")) {
            continue;
        }
        if name.starts_with('_') || exclude.iter().any(|p| p.matches(&name)) {
            debug!("Skipping excluded post file {}", name);
            continue;
        }
        match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => continue,
            Ok(_) => {}
            Err(e) => {
                error!("Error processing blog post {}: {}", name, e);
                continue;
            }
        }

        posts.push(PostFile {
            path: entry.path(),
            name,
        });
    }

    posts.sort_by(|a, b| a.name.cmp(&b.name));
    posts.sort_by(|a, b| {
        let date_a = filename_date(&a.name).unwrap_or("0000-00-00");
        let date_b = filename_date(&b.name).unwrap_or("0000-00-00");
        date_b.cmp(date_a)
    });

    Ok(posts)
}

/// Collect every blog post under the configured blog directory.
///
/// A missing or unreadable directory yields no posts.
pub async fn collect_posts(
    dir: &Path,
    settings: &BlogSettings,
    now: DateTime<Utc>,
) -> Vec<ContentRecord> {
    let files = match list_posts(dir, settings).await {
        Ok(files) => files,
        Err(ExtractError::NotFound(_)) => {
            error!("Blog directory not found: {}", dir.display());
            return Vec::new();
        }
        Err(e) => {
            error!("Error reading blog directory: {}", e);
            return Vec::new();
        }
    };

    let mut posts = Vec::with_capacity(files.len());
    for file in files {
        match read_source(&file.path).await {
            Ok(source) => posts.push(post_record(&file.name, &source, now, settings.recent_days)),
            Err(e) => error!("Error processing blog post {}: {}", file.name, e),
        }
    }

    posts
}
