//! sitecorpus - Site content extraction for search indexing
//!
//! Reads the site's pages and blog posts (Markdown/MDX with optional
//! frontmatter), reduces them to plain text, and emits a JSON corpus for
//! the reindex service.
//!
//! # Architecture
//!
//! A single sequential pass:
//! - Frontmatter is split from the body with a line-based parser
//! - The body is reduced to text by ordered regex substitutions
//! - Records are assembled and truncated to a fixed length
//! - The payload `{ pages, blogPosts }` is written to stdout
//!
//! # Modules
//!
//! - `content`: Frontmatter, markup stripping, record types
//! - `extract`: Page, section and blog collection; the driver
//! - `config`: Content layout configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Extract from the current directory
//! sitecorpus > corpus.json
//!
//! # Extract from another checkout, pretty-printed
//! sitecorpus --root ../site --pretty
//!
//! # Show resolved configuration
//! sitecorpus config
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod extract;

// Re-export main types at crate root for convenience
pub use config::{load_config, ResolvedConfig, Section};
pub use content::{ContentRecord, Corpus, PostMetadata, MAX_CONTENT_CHARS};
pub use extract::{ExtractError, Extractor};
