//! Markdown/MDX to plain text.
//!
//! An ordered table of regex substitutions, not a Markdown parser. Nested
//! or malformed markup can leak through; callers index the result for
//! search, so approximate text is good enough.

use std::sync::LazyLock;

use regex::Regex;

/// Substitutions applied in order. Order matters: links are rewritten
/// before images, bold before italic, and line-start patterns run before
/// whitespace is collapsed.
static STRIP_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // MDX imports and exports
        (r#"(?m)^[ \t]*import\s+.*?from\s+['"].*?['"];?[ \t]*\n?"#, ""),
        (r"(?m)^[ \t]*export[ \t]+.*\n?", ""),
        // Admonitions, contents included: :::tip ... :::
        (r"(?is):::[a-z]*.*?:::", " "),
        // JSX components and HTML tags
        (r"<[^>]+>", " "),
        // Fenced and inline code
        (r"(?s)```.*?```", ""),
        (r"`[^`]+`", ""),
        // [text](url) -> text
        (r"\[([^\]]+)\]\([^)]+\)", "$1"),
        // Images, then orphaned alt text
        (r"!\[[^\]]*\]\([^)]+\)", ""),
        (r"!\[[^\]]*\]", ""),
        // Headings and emphasis
        (r"(?m)^#+\s+", ""),
        (r"\*\*([^*]+)\*\*", "$1"),
        (r"\*([^*]+)\*", "$1"),
        (r"__([^_]+)__", "$1"),
        (r"_([^_]+)_", "$1"),
        (r"~~([^~]+)~~", "$1"),
        // Horizontal rules
        (r"(?m)^---+$", ""),
        // List markers
        (r"(?m)^\s*[-*+]\s+", ""),
        (r"(?m)^\s*\d+\.\s+", ""),
        // Whitespace
        (r"\n{2,}", "\n"),
        (r"\s+", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid markup pattern"),
            replacement,
        )
    })
    .collect()
});

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// Strip markup from a body, producing single-spaced plain text
pub fn strip_markup(body: &str) -> String {
    let mut text = body.replace("\r\n", "\n");

    for (pattern, replacement) in STRIP_PATTERNS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text.trim().to_string()
}

/// Truncate to at most `max_chars` characters without splitting a character
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// A fenced code block found in a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Info string of the opening fence, `text` when empty
    pub language: String,

    /// Trimmed code between the fences
    pub code: String,
}

/// Scan a body for fenced code blocks.
///
/// Linear scan over ``` markers. An unclosed fence ends the scan and its
/// contents are not reported.
pub fn scan_code_fences(body: &str) -> Vec<CodeBlock> {
    split_code_fences(body).1
}

/// Cut fenced code blocks out of a body.
///
/// Returns the remaining prose, with each closed block replaced by a line
/// break, and the blocks in document order. Text from an unclosed fence
/// onwards is left in the prose.
pub fn split_code_fences(body: &str) -> (String, Vec<CodeBlock>) {
    const FENCE: &str = "```";

    let mut prose = String::with_capacity(body.len());
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = body[cursor..].find(FENCE) {
        let open = cursor + offset;
        let after_fence = open + FENCE.len();
        let line_end = body[after_fence..]
            .find('\n')
            .map_or(body.len(), |i| after_fence + i);
        let code_start = (line_end + 1).min(body.len());

        let Some(close) = body[code_start..].find(FENCE) else {
            break;
        };
        let close = code_start + close;

        let language = body[after_fence..line_end].trim();
        blocks.push(CodeBlock {
            language: if language.is_empty() {
                "text".to_string()
            } else {
                language.to_string()
            },
            code: body[code_start..close].trim().to_string(),
        });

        prose.push_str(&body[cursor..open]);
        prose.push('\n');
        cursor = close + FENCE.len();
    }

    prose.push_str(&body[cursor..]);
    (prose, blocks)
}

/// A Markdown link pointing off-site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Collect `[text](url)` links whose url is not site-relative
pub fn external_links(body: &str) -> Vec<Link> {
    LINK_RE
        .captures_iter(body)
        .filter(|caps| !caps[2].starts_with('/'))
        .map(|caps| Link {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_imports_and_exports() {
        let body = "import Tabs from '@theme/Tabs';\nexport const meta = { a: 1 };\nHello";
        assert_eq!(strip_markup(body), "Hello");
    }

    #[test]
    fn test_strip_admonition_with_contents() {
        let body = "Before\n\n:::tip Pro tip\nHidden advice\n:::\n\nAfter";
        assert_eq!(strip_markup(body), "Before After");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_markup("<div className=\"x\">Inside</div> <Widget />"),
            "Inside"
        );
    }

    #[test]
    fn test_strip_code() {
        let body = "Run this:\n\n```bash\nk6 run script.js\n```\n\nthen `npm test` works";
        assert_eq!(strip_markup(body), "Run this: then works");
    }

    #[test]
    fn test_links_keep_text() {
        assert_eq!(
            strip_markup("See [the docs](https://example.com/docs) now"),
            "See the docs now"
        );
    }

    #[test]
    fn test_orphaned_image_alt_removed() {
        assert_eq!(strip_markup("A ![diagram] B"), "A B");
    }

    #[test]
    fn test_image_after_link_pass_leaves_bang_alt() {
        // Link rewriting runs first, so a full image keeps its alt text
        assert_eq!(strip_markup("![alt text](/img/a.png)"), "!alt text");
    }

    #[test]
    fn test_headings_and_emphasis() {
        let body = "## Title\n\n**bold** *italic* __strong__ _em_ ~~gone~~";
        assert_eq!(strip_markup(body), "Title bold italic strong em gone");
    }

    #[test]
    fn test_rules_and_list_markers() {
        let body = "Intro\n\n---\n\n- one\n* two\n+ three\n1. four\n10. five";
        assert_eq!(strip_markup(body), "Intro one two three four five");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(strip_markup("  a\r\n\r\n\r\nb\t\tc  "), "a b c");
    }

    #[test]
    fn test_plain_text_is_idempotent() {
        let once = strip_markup("Plain words, nothing else. Really!");
        assert_eq!(strip_markup(&once), once);
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_scan_code_fences() {
        let body = "a\n```rust\nfn main() {}\n```\nb\n```\nplain\n```\n";
        let blocks = scan_code_fences(body);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, "rust");
        assert_eq!(blocks[0].code, "fn main() {}");
        assert_eq!(blocks[1].language, "text");
        assert_eq!(blocks[1].code, "plain");
    }

    #[test]
    fn test_scan_unclosed_fence() {
        let blocks = scan_code_fences("```js\nconsole.log(1)\n```\n```python\nnever closed");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "js");
    }

    #[test]
    fn test_split_code_fences_keeps_prose() {
        let body = "Intro\n\n```js\nif (a < b) {}\n```\n\nAfter -> next\n```py\nopen";
        let (prose, blocks) = split_code_fences(body);

        assert_eq!(prose, "Intro\n\n\n\n\nAfter -> next\n```py\nopen");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].code, "if (a < b) {}");
    }

    #[test]
    fn test_external_links() {
        let body = "[Home](/), [Azure](https://azure.com) and [k6](https://k6.io)";
        let links = external_links(body);
        assert_eq!(
            links,
            vec![
                Link {
                    text: "Azure".to_string(),
                    url: "https://azure.com".to_string()
                },
                Link {
                    text: "k6".to_string(),
                    url: "https://k6.io".to_string()
                },
            ]
        );
    }
}
