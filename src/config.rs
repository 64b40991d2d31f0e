//! Configuration for sitecorpus.
//!
//! Configuration sources (highest priority first):
//! 1. CLI flags and environment variables (SITECORPUS_ROOT, SITECORPUS_CONFIG)
//! 2. Config file (explicit path, or <root>/.sitecorpus/config.yaml)
//! 3. Defaults matching the site layout
//!
//! Relative paths in the config file are resolved against the content root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file location relative to the content root
pub const CONFIG_FILE: &str = ".sitecorpus/config.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    /// Page files, relative to `paths.pages_dir`
    #[serde(default)]
    pub pages: Option<Vec<String>>,
    /// Section index pages
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
    #[serde(default)]
    pub blog: Option<BlogConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    pub pages_dir: Option<String>,
    pub blog_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogConfig {
    pub recent_days: Option<i64>,
    pub exclude: Option<Vec<String>>,
}

/// A section index page (theme parks, video game platforms, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Record id without the `page-` prefix
    pub id: String,

    /// Index file, relative to the content root
    pub path: String,

    /// Title used when frontmatter has none
    pub title: String,

    pub url: String,

    #[serde(default = "default_section_category")]
    pub category: String,

    /// Take `tags` from the frontmatter `keywords` field
    #[serde(default)]
    pub keywords_as_tags: bool,
}

fn default_section_category() -> String {
    "page".to_string()
}

impl Section {
    fn new(id: &str, path: &str, title: &str, url: &str, category: &str, keywords_as_tags: bool) -> Self {
        Self {
            id: id.to_string(),
            path: path.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            keywords_as_tags,
        }
    }
}

/// Blog collection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogSettings {
    /// Posts dated within this many days are flagged `recent`
    pub recent_days: i64,

    /// Extra glob patterns for file names to skip; `_` drafts are always skipped
    pub exclude: Vec<String>,
}

impl Default for BlogSettings {
    fn default() -> Self {
        Self {
            recent_days: 90,
            exclude: Vec::new(),
        }
    }
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    /// Content root (site repository checkout)
    pub root: PathBuf,
    /// Directory holding standalone pages
    pub pages_dir: PathBuf,
    /// Directory holding blog posts
    pub blog_dir: PathBuf,
    /// Page allow-list, in output order
    pub pages: Vec<String>,
    /// Section index pages, in output order
    pub sections: Vec<Section>,
    pub blog: BlogSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Built-in layout of the site, rooted at `root`
    pub fn defaults(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            pages_dir: root.join("src").join("pages"),
            blog_dir: root.join("blog"),
            pages: default_pages(),
            sections: default_sections(),
            blog: BlogSettings::default(),
            config_file: None,
            root,
        }
    }
}

fn default_pages() -> Vec<String> {
    ["about.mdx", "projects.mdx", "contact.mdx", "sponsors.mdx"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_sections() -> Vec<Section> {
    vec![
        Section::new("disney", "disney/index.mdx", "Disney Theme Parks", "/disney", "page", false),
        Section::new("universal", "universal/index.mdx", "Universal Theme Parks", "/universal", "page", false),
        Section::new("videogames", "videogames/index.mdx", "Video Games", "/videogames", "videogames", true),
        Section::new(
            "videogames-xbox",
            "videogames/xbox/index.mdx",
            "Xbox & PC",
            "/videogames/xbox",
            "videogames",
            true,
        ),
        Section::new(
            "videogames-playstation",
            "videogames/playstation/index.mdx",
            "PlayStation",
            "/videogames/playstation",
            "videogames",
            true,
        ),
        Section::new(
            "videogames-nintendo-switch",
            "videogames/nintendo-switch/index.mdx",
            "Nintendo Switch",
            "/videogames/nintendo-switch",
            "videogames",
            true,
        ),
        Section::new(
            "videogames-meta-quest",
            "videogames/meta-quest/index.mdx",
            "Meta Quest",
            "/videogames/meta-quest",
            "videogames",
            true,
        ),
    ]
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the content root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Load configuration for a content root.
///
/// An explicit config path must exist; otherwise `<root>/.sitecorpus/config.yaml`
/// is used when present and defaults apply when it is not.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let config_file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(root.join(CONFIG_FILE)).filter(|p| p.is_file()),
    };

    let mut resolved = ResolvedConfig::defaults(root);

    let Some(config_path) = config_file else {
        return Ok(resolved);
    };

    let config = load_config_file(&config_path)?;
    tracing::debug!(
        "Loaded config version {} from {}",
        config.version,
        config_path.display()
    );

    if let Some(ref dir) = config.paths.pages_dir {
        resolved.pages_dir = resolve_path(root, dir);
    }
    if let Some(ref dir) = config.paths.blog_dir {
        resolved.blog_dir = resolve_path(root, dir);
    }
    if let Some(pages) = config.pages {
        resolved.pages = pages;
    }
    if let Some(sections) = config.sections {
        resolved.sections = sections;
    }
    if let Some(blog) = config.blog {
        if let Some(days) = blog.recent_days {
            resolved.blog.recent_days = days;
        }
        if let Some(exclude) = blog.exclude {
            resolved.blog.exclude = exclude;
        }
    }
    resolved.config_file = Some(config_path);

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config.pages_dir, temp.path().join("src").join("pages"));
        assert_eq!(config.blog_dir, temp.path().join("blog"));
        assert_eq!(config.pages.len(), 4);
        assert_eq!(config.sections.len(), 7);
        assert_eq!(config.blog.recent_days, 90);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_discovery() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".sitecorpus");
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_path = config_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  blog_dir: content/posts
pages:
  - about.mdx
sections:
  - id: garden
    path: garden/index.md
    title: Garden
    url: /garden
blog:
  recent_days: 30
"#
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.config_file, Some(config_path));
        assert_eq!(config.blog_dir, temp.path().join("content/posts"));
        assert_eq!(config.pages_dir, temp.path().join("src").join("pages"));
        assert_eq!(config.pages, vec!["about.mdx".to_string()]);
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].category, "page");
        assert!(!config.sections[0].keywords_as_tags);
        assert_eq!(config.blog.recent_days, 30);
        assert!(config.blog.exclude.is_empty());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        assert!(load_config(temp.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/srv/site");

        assert_eq!(resolve_path(&base, "blog"), PathBuf::from("/srv/site/blog"));
        assert_eq!(
            resolve_path(&base, "/absolute/posts"),
            PathBuf::from("/absolute/posts")
        );
    }
}
