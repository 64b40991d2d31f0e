//! Property Tests
//!
//! Frontmatter round-trips, truncation length and stripping idempotence.

use proptest::prelude::*;
use sitecorpus::content::{parse_frontmatter, strip_markup, truncate_chars};
use sitecorpus::extract::page_record;
use sitecorpus::MAX_CONTENT_CHARS;

proptest! {
    #[test]
    fn scalar_values_round_trip(
        key in "[a-z][a-z_]{0,12}",
        value in "[A-Za-z0-9 .,:!?-]{0,40}",
        quote in prop::sample::select(vec!["", "\"", "'"]),
    ) {
        let value = value.trim().to_string();
        let input = format!("---\n{key}: {quote}{value}{quote}\n---\nbody\n");
        let parsed = parse_frontmatter(&input);

        prop_assert_eq!(parsed.frontmatter.joined(&key), value);
        prop_assert_eq!(parsed.body, "body\n");
    }

    #[test]
    fn unclosed_block_is_all_body(lines in prop::collection::vec("[a-z]{1,8}: [a-z ]{0,12}", 0..6)) {
        let input = format!("---\n{}", lines.join("\n"));
        let parsed = parse_frontmatter(&input);

        prop_assert!(parsed.frontmatter.is_empty());
        prop_assert_eq!(parsed.body, input.as_str());
    }

    #[test]
    fn long_content_is_exactly_max_chars(text in "\\PC{5001,5600}") {
        prop_assert_eq!(truncate_chars(&text, MAX_CONTENT_CHARS).chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn page_content_never_exceeds_max(words in prop::collection::vec("[a-zé]{1,9}", 0..1500)) {
        let record = page_record("about.mdx", &words.join(" "));
        prop_assert!(record.content.chars().count() <= MAX_CONTENT_CHARS);
    }

    #[test]
    fn stripping_plain_text_is_idempotent(text in "[A-Za-z ,.!?]{0,200}") {
        let once = strip_markup(&text);
        prop_assert_eq!(strip_markup(&once), once);
    }
}
