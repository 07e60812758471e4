//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate) and
//! must be identical across both modules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post parsed from a markdown file under `posts/`.
///
/// Posts follow the `YYYY-MM-DD-slug.md` naming convention:
/// - Dated files appear in the index listing, sorted newest first
/// - Undated files are drafts: generated at `/slug/` but hidden from the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// URL slug (filename stem with the date prefix stripped)
    pub slug: String,
    /// Title from first `# heading` in markdown, or the slug with dashes
    /// converted to spaces as a fallback
    pub title: String,
    /// Publication date from the filename prefix. `None` marks a draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// First body paragraph, used in the index listing and as the post
    /// page's meta description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Markdown body with the title heading removed (the title is rendered
    /// separately)
    pub body: String,
    /// Path of the source file, relative to the content root
    pub source_path: String,
}

/// The resume page parsed from `resume.md` at the content root.
///
/// Always present: the header navigation links to `/resume`, so the scan
/// stage fails when the file is missing rather than shipping a dead link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumePage {
    /// Title from the first `# heading`, or "Resume"
    pub title: String,
    /// Markdown body with the title heading removed
    pub body: String,
}
