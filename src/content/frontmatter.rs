//! Lightweight frontmatter parsing.
//!
//! Content files may start with a `---` delimited block of `key: value`
//! lines. This is deliberately not YAML: values are either scalars or
//! bracketed lists, and anything else passes through as an opaque string.
//!
//! ```text
//! ---
//! title: "Load Testing on Azure"
//! slug: load-testing
//! tags: [Azure, "Load Testing"]
//! ---
//! Body starts here.
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Leading block, closing `---` must be followed by a line break.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n(.*)\z").expect("valid frontmatter regex")
});

/// A single frontmatter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValue {
    /// Plain scalar (quotes already removed)
    Text(String),

    /// Bracketed list: `[a, b]`
    List(Vec<String>),
}

impl FrontmatterValue {
    /// Render the value as a single string, joining lists with `", "`
    pub fn to_text(&self) -> String {
        match self {
            FrontmatterValue::Text(s) => s.clone(),
            FrontmatterValue::List(items) => items.join(", "),
        }
    }
}

/// Parsed frontmatter key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    values: HashMap<String, FrontmatterValue>,
}

impl Frontmatter {
    /// Get a raw value by key
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.values.get(key)
    }

    /// Get a value rendered as text, treating empty strings as absent
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(FrontmatterValue::to_text).filter(|s| !s.is_empty())
    }

    /// Get a value rendered as a comma-joined string (empty when absent)
    pub fn joined(&self, key: &str) -> String {
        self.get(key).map(FrontmatterValue::to_text).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    fn insert(&mut self, key: String, value: FrontmatterValue) {
        self.values.insert(key, value);
    }
}

/// Frontmatter plus the remaining body
#[derive(Debug, Clone)]
pub struct Parsed<'a> {
    pub frontmatter: Frontmatter,
    pub body: &'a str,
}

/// Split a file into frontmatter and body.
///
/// Never fails: input without a complete block (including one that is
/// never closed) yields empty frontmatter and the whole input as body.
pub fn parse_frontmatter(input: &str) -> Parsed<'_> {
    let Some(caps) = BLOCK_RE.captures(input) else {
        return Parsed {
            frontmatter: Frontmatter::default(),
            body: input,
        };
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let mut frontmatter = Frontmatter::default();
    for line in block.lines() {
        if let Some((key, value)) = parse_line(line) {
            frontmatter.insert(key, value);
        }
    }

    Parsed { frontmatter, body }
}

fn parse_line(line: &str) -> Option<(String, FrontmatterValue)> {
    let colon = line.find(':')?;
    if colon == 0 {
        return None;
    }

    let key = line[..colon].trim().to_string();
    let value = unquote(line[colon + 1..].trim());

    let value = match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => FrontmatterValue::List(
            inner
                .split(',')
                .map(|item| item.trim().replace(['\'', '"'], ""))
                .collect(),
        ),
        None => FrontmatterValue::Text(value.to_string()),
    };

    Some((key, value))
}

/// Strip one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // A lone quote character counts as both ends
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}
