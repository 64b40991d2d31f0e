//! Content parsing and normalization.
//!
//! Turns a raw Markdown/MDX source file into the pieces a search record
//! is built from:
//!
//! ```text
//! raw file ──► frontmatter ──► body ──► strip_markup ──► ContentRecord
//!                                  └──► scan_code_fences / external_links
//! ```

pub mod frontmatter;
pub mod markup;
pub mod record;

pub use frontmatter::{parse_frontmatter, Frontmatter, FrontmatterValue, Parsed};
pub use markup::{
    external_links, scan_code_fences, split_code_fences, strip_markup, truncate_chars, CodeBlock,
    Link,
};
pub use record::{ContentRecord, Corpus, PostMetadata, MAX_CONTENT_CHARS};
