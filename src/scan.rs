//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory once, up
//! front, and produces a structured manifest that the generate stage
//! consumes. Templates never touch the filesystem or resolve data on their
//! own; everything they need is in the manifest.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                             # Content root
//! ├── config.toml                      # Site metadata + theme (optional)
//! ├── assets/                          # Static files, copied to the output root
//! ├── resume.md                        # Resume page (required)
//! └── posts/
//!     ├── 2024-03-05-hello-world.md    # Dated post (listed on the index)
//!     ├── 2023-11-20-on-gradients.md
//!     └── some-idea.md                 # No date = draft (built, not listed)
//! ```
//!
//! ## Naming Conventions
//!
//! - **Dated posts** (`YYYY-MM-DD-slug.md`): listed on the index, newest first
//! - **Undated posts**: drafts, generated at `/slug/` but hidden from the index
//! - **Titles**: first `# heading` in the file, else the slug with dashes as spaces
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - No duplicate slugs (two files that would write to the same URL)
//! - No empty slugs (a filename that is only a date)
//! - No slugs that collide with built-in pages (`contact`, `resume`, `assets`)
//! - `resume.md` must exist, the header links to it unconditionally

use crate::config::{self, SiteConfig};
use crate::metadata;
use crate::naming::parse_post_name;
use crate::types::{Post, ResumePage};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Duplicate post slug {0:?}: {1}")]
    DuplicateSlug(String, PathBuf),
    #[error("Post filename is only a date, no slug: {0}")]
    EmptySlug(PathBuf),
    #[error("Post slug {0:?} collides with a built-in page")]
    ReservedSlug(String),
    #[error("Missing resume.md in content root: {0}")]
    MissingResume(PathBuf),
}

/// Slugs taken by built-in pages and the asset tree.
const RESERVED_SLUGS: &[&str] = &["contact", "resume", "assets"];

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    /// All posts: dated ones newest first, then drafts by slug.
    pub posts: Vec<Post>,
    pub resume: ResumePage,
    pub config: SiteConfig,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let posts = scan_posts(root)?;
    let resume = parse_resume(root)?;
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    Ok(Manifest {
        posts,
        resume,
        config,
    })
}

/// Parse all markdown files under `posts/` into posts.
///
/// Dated files (`YYYY-MM-DD-slug.md`) are sorted newest first; undated files
/// are drafts and sort after them by slug. A missing `posts/` directory just
/// means an empty blog.
fn scan_posts(root: &Path) -> Result<Vec<Post>, ScanError> {
    let posts_dir = root.join("posts");
    if !posts_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut md_files: Vec<PathBuf> = fs::read_dir(&posts_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    md_files.sort();

    let mut posts = Vec::new();
    let mut seen_slugs: HashSet<String> = HashSet::new();
    for md_path in &md_files {
        let stem = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let parsed = parse_post_name(&stem);

        if parsed.slug.is_empty() {
            return Err(ScanError::EmptySlug(md_path.clone()));
        }
        if RESERVED_SLUGS.contains(&parsed.slug.as_str()) {
            return Err(ScanError::ReservedSlug(parsed.slug));
        }
        if !seen_slugs.insert(parsed.slug.clone()) {
            return Err(ScanError::DuplicateSlug(parsed.slug, md_path.clone()));
        }

        let content = fs::read_to_string(md_path)?;
        let title = metadata::resolve_title(&content, &parsed.display_title);
        let excerpt = metadata::excerpt(&content);
        let body = metadata::strip_title_heading(&content);

        let source_path = md_path
            .strip_prefix(root)
            .unwrap_or(md_path)
            .to_string_lossy()
            .to_string();

        posts.push(Post {
            slug: parsed.slug,
            title,
            date: parsed.date,
            excerpt,
            body,
            source_path,
        });
    }

    // Newest first; drafts (no date) after all dated posts, by slug
    posts.sort_by(|a, b| match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    });
    Ok(posts)
}

/// Parse `resume.md` at the content root.
///
/// Required: the site navigation links to `/resume` on every page, so a
/// missing file fails the scan instead of producing a dead link.
fn parse_resume(root: &Path) -> Result<ResumePage, ScanError> {
    let path = root.join("resume.md");
    if !path.is_file() {
        return Err(ScanError::MissingResume(path));
    }
    let content = fs::read_to_string(&path)?;
    let title = metadata::resolve_title(&content, "Resume");
    let body = metadata::strip_title_heading(&content);
    Ok(ResumePage { title, body })
}
