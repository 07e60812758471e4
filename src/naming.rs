//! Centralized filename parsing for the `YYYY-MM-DD-slug` convention.
//!
//! Post files carry their publication date as an ISO date prefix, followed by
//! the URL slug. This module provides a single parsing function so the scan
//! stage and the CLI output agree on how filenames are interpreted.
//!
//! ## Display Titles
//!
//! Dashes in the slug are converted to spaces for display. The display title
//! is only a fallback: a `# heading` inside the file wins (see
//! [`crate::metadata`]).
//! - `2024-03-05-hello-world.md` → slug "hello-world", display "hello world"
//! - `some-idea.md` → no date (draft), slug "some-idea", display "some idea"

use chrono::NaiveDate;

/// Result of parsing a post filename stem like `2024-03-05-hello-world`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Publication date if the stem starts with a valid `YYYY-MM-DD-` prefix.
    pub date: Option<NaiveDate>,
    /// URL slug: the stem with the date prefix stripped. Empty if the stem
    /// was a bare date with nothing after it.
    pub slug: String,
    /// Display title: slug with dashes converted to spaces.
    pub display_title: String,
}

/// Parse a post filename stem following the `YYYY-MM-DD-slug` convention.
///
/// Handles these patterns:
/// - `"2024-03-05-hello-world"` → date=Some(2024-03-05), slug="hello-world"
/// - `"2024-03-05"` → date=Some(2024-03-05), slug="" (scan rejects this)
/// - `"2024-03-05-"` → date=Some(2024-03-05), slug=""
/// - `"some-idea"` → date=None, slug="some-idea" (draft)
/// - `"2024-13-99-bad-date"` → date=None, the whole stem becomes the slug
pub fn parse_post_name(stem: &str) -> ParsedName {
    if stem.len() >= 10 {
        let (prefix, rest) = stem.split_at(10);
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            if rest.is_empty() || rest.starts_with('-') {
                let slug = rest.strip_prefix('-').unwrap_or(rest);
                return ParsedName {
                    date: Some(date),
                    slug: slug.to_string(),
                    display_title: slug.replace('-', " "),
                };
            }
        }
    }
    // No date prefix: the whole stem is the slug
    ParsedName {
        date: None,
        slug: stem.to_string(),
        display_title: stem.replace('-', " "),
    }
}
