//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity (post, page) is its title and positional index, with
//! filesystem paths shown as secondary context via indented `Source:` lines.
//! This reads as a content inventory while still letting users trace data
//! back to specific files.
//!
//! ## Scan
//!
//! ```text
//! Posts
//! 001 Hello World (2024-03-05)
//!     Source: posts/2024-03-05-hello-world.md
//!     The opening paragraph of the post, truncated...
//! 002 Some Idea (draft)
//!     Source: posts/some-idea.md
//!
//! Pages
//! Resume
//!     Source: resume.md
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Contact → contact/index.html
//! Resume → resume/index.html
//! 001 Hello World → hello-world/index.html
//!
//! Generated 1 post page, 3 site pages
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure, no I/O beyond the existence probes for the config
//! section.

use crate::scan::Manifest;
use crate::types::Post;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Post header line: index, title, and either the date or a draft marker.
fn post_line(index: usize, post: &Post) -> String {
    match post.date {
        Some(date) => format!("{} {} ({})", format_index(index), post.title, date),
        None => format!("{} {} (draft)", format_index(index), post.title),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered content inventory.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Posts".to_string());
    if manifest.posts.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(post_line(i + 1, post));
        lines.push(format!("    Source: {}", post.source_path));
        if let Some(ref excerpt) = post.excerpt {
            let preview = truncate_desc(excerpt.trim(), 60);
            if !preview.is_empty() {
                lines.push(format!("    {}", preview));
            }
        }
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    lines.push(manifest.resume.title.clone());
    lines.push("    Source: resume.md".to_string());

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").is_file() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (stock defaults)".to_string());
    }
    if source_root.join("assets").is_dir() {
        lines.push("    assets/".to_string());
    }

    lines
}

pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output mapping each entity to its output file.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home → index.html".to_string());
    lines.push("Contact → contact/index.html".to_string());
    lines.push(format!("{} → resume/index.html", manifest.resume.title));

    for (i, post) in manifest.posts.iter().enumerate() {
        let marker = if post.date.is_none() { " (draft)" } else { "" };
        lines.push(format!(
            "{} {}{} → {}/index.html",
            format_index(i + 1),
            post.title,
            marker,
            post.slug
        ));
    }

    lines.push(String::new());
    let noun = if manifest.posts.len() == 1 {
        "post page"
    } else {
        "post pages"
    };
    lines.push(format!(
        "Generated {} {}, 3 site pages",
        manifest.posts.len(),
        noun
    ));

    lines
}

pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}
