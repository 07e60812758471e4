//! Post metadata resolution from markdown bodies.
//!
//! Each post carries a title and a short description, neither of which lives
//! in a separate metadata file. Both are recovered from the markdown itself:
//!
//! - **Title**: the first `# heading` line. Writing the title into the
//!   document keeps the file readable on its own, in an editor or on a
//!   code host. When no heading exists the filename slug (dashes to spaces)
//!   is used instead.
//!
//! - **Excerpt**: the first paragraph that is not a heading, reduced to
//!   plain text. Shown under the post link on the index page and emitted as
//!   the post page's meta description, where markup would leak into
//!   attribute values.
//!
//! Resolution is first-non-empty-wins, each field independent of the other.

/// Extract the first `# heading` line from a markdown body.
///
/// Only level-one ATX headings count. Returns the heading text with the
/// marker stripped and surrounding whitespace trimmed.
pub fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim_start)
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Resolve a post title: first `# heading`, falling back to the given
/// display title derived from the filename.
pub fn resolve_title(body: &str, fallback: &str) -> String {
    first_heading(body).unwrap_or_else(|| fallback.to_string())
}

/// Remove the title heading line from a markdown body.
///
/// The title is rendered separately on the page, so leaving the heading in
/// the body would print it twice. Only the first `# heading` line is
/// removed; everything else is untouched.
pub fn strip_title_heading(body: &str) -> String {
    let mut stripped = false;
    let lines: Vec<&str> = body
        .lines()
        .filter(|line| {
            if !stripped && line.trim_start().starts_with("# ") {
                stripped = true;
                return false;
            }
            true
        })
        .collect();
    lines.join("\n").trim_start_matches('\n').to_string()
}

/// Extract the first non-heading paragraph as a plain-text excerpt.
///
/// Returns `None` for bodies that contain nothing but headings and blank
/// lines.
pub fn excerpt(body: &str) -> Option<String> {
    let mut paragraph = String::new();
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        if trimmed.starts_with('#') {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        if !paragraph.is_empty() {
            paragraph.push(' ');
        }
        paragraph.push_str(trimmed);
    }
    let plain = plain_text(&paragraph);
    if plain.is_empty() { None } else { Some(plain) }
}

/// Reduce inline markdown to plain text.
///
/// Handles the constructs that actually show up in short first paragraphs:
/// links become their label, emphasis and code markers are dropped. Not a
/// full markdown parser, and does not need to be.
pub fn plain_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' | '_' | '`' => {}
            '[' => {
                // Collect the link label, then skip the (url) part if present
                let mut label = String::new();
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    label.push(inner);
                }
                if chars.peek() == Some(&'(') {
                    for inner in chars.by_ref() {
                        if inner == ')' {
                            break;
                        }
                    }
                }
                out.push_str(&plain_text(&label));
            }
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}
