//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest and generates the
//! final static site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): bio followed by the post listing
//! - **Post pages** (`/{slug}/index.html`): one per markdown post
//! - **Contact page** (`/contact/index.html`): twitter and email links
//! - **Resume page** (`/resume/index.html`): rendered from `resume.md`
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── contact/
//! │   └── index.html
//! ├── resume/
//! │   └── index.html
//! ├── hello-world/
//! │   └── index.html             # One directory per post slug
//! └── favicon.ico                # content/assets/* copied to the root
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every renderer is a pure function from manifest data to markup; the site
//! data is loaded once by the scan stage and passed down as parameters, so
//! nothing here reads the filesystem except the final writes. Styling is
//! inlined per page: theme CSS (custom properties + breakpoint media query,
//! see [`config::generate_theme_css`]) prepended to the static stylesheet.

use crate::config::{self, SiteMetadata};
use crate::scan::Manifest;
use crate::types::{Post, ResumePage};
use chrono::{Datelike, Local, NaiveDate};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    source_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    // Theme CSS first so the static stylesheet can consume the variables
    let theme_css = config::generate_theme_css(&manifest.config.theme);
    let css = format!("{}\n\n{}", theme_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;
    copy_assets(source_dir, output_dir)?;

    let site = &manifest.config.site;

    let index_html = render_index(&manifest, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    let contact_dir = output_dir.join("contact");
    fs::create_dir_all(&contact_dir)?;
    let contact_html = render_contact_page(site, &css);
    fs::write(contact_dir.join("index.html"), contact_html.into_string())?;

    let resume_dir = output_dir.join("resume");
    fs::create_dir_all(&resume_dir)?;
    let resume_html = render_resume_page(&manifest.resume, site, &css);
    fs::write(resume_dir.join("index.html"), resume_html.into_string())?;

    // Pure renders over shared immutable data, one directory per post
    manifest
        .posts
        .par_iter()
        .try_for_each(|post| -> Result<(), GenerateError> {
            let post_dir = output_dir.join(&post.slug);
            fs::create_dir_all(&post_dir)?;
            let post_html = render_post_page(post, site, &css);
            fs::write(post_dir.join("index.html"), post_html.into_string())?;
            Ok(())
        })?;

    Ok(())
}

/// Copy `content/assets/` into the output root, preserving subdirectories.
///
/// Missing assets directory just means there is nothing to copy.
fn copy_assets(source_dir: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let assets = source_dir.join("assets");
    if !assets.is_dir() {
        return Ok(());
    }
    for entry in walkdir::WalkDir::new(&assets) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(&assets).unwrap();
        let target = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the full page document: SEO head, site header, page content,
/// footer.
///
/// `page_title` is joined with the site title as "Page | Site"; the index
/// passes `None` and gets the bare site title. `path` is the page's
/// absolute path on the site, used for the canonical and Open Graph URLs.
fn base_document(
    page_title: Option<&str>,
    description: &str,
    path: &str,
    site: &SiteMetadata,
    css: &str,
    content: Markup,
) -> Markup {
    let title = match page_title {
        Some(t) => format!("{} | {}", t, site.title),
        None => site.title.clone(),
    };
    let canonical = format!("{}{}", site.base_url.trim_end_matches('/'), path);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                meta name="author" content=(site.author);
                link rel="canonical" href=(canonical);
                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:type" content="website";
                meta property="og:url" content=(canonical);
                meta name="twitter:card" content="summary";
                meta name="twitter:creator" content={ "@" (site.social.twitter) };
                style { (PreEscaped(css)) }
            }
            body {
                div.page-container {
                    (site_header(&site.title))
                    main {
                        (content)
                    }
                    (site_footer())
                }
            }
        }
    }
}

/// Renders the site header: the title linking home, and the fixed
/// navigation set.
///
/// The three links are deliberately hardcoded. Below the theme breakpoint
/// they spread out evenly instead of hugging the right edge, handled
/// entirely by the generated media query.
fn site_header(title: &str) -> Markup {
    html! {
        header.site-header {
            h1.site-title {
                a href="/" { (title) }
            }
            nav.site-nav {
                a href="/" { "Blog" }
                a href="/contact" { "Contact" }
                a href="/resume" { "Resume" }
            }
        }
    }
}

/// Renders the author bio paragraph for the index page.
///
/// The social handles travel with the metadata but are not rendered here;
/// the contact page is where they surface.
fn bio(site: &SiteMetadata) -> Markup {
    html! {
        div.bio {
            (PreEscaped(markdown_to_html(&site.bio)))
        }
    }
}

/// Renders the footer with the year of the build.
fn site_footer() -> Markup {
    let year = Local::now().year();
    html! {
        footer.site-footer {
            "© " (year) ", Built with "
            a href="https://www.rust-lang.org" { "Rust" }
        }
    }
}

/// Convert markdown to an HTML string.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Format a post date for display, e.g. "March 5, 2024".
fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index page: bio, then the dated posts newest first.
///
/// Drafts (undated posts) are generated elsewhere but not listed here.
fn render_index(manifest: &Manifest, css: &str) -> Markup {
    let site = &manifest.config.site;
    let listed: Vec<&Post> = manifest.posts.iter().filter(|p| p.date.is_some()).collect();

    let content = html! {
        (bio(site))
        @if listed.is_empty() {
            p.no-posts { "No posts yet." }
        } @else {
            section.post-list {
                @for post in &listed {
                    article.post-preview {
                        h2.post-title {
                            a href={ "/" (post.slug) "/" } { (post.title) }
                        }
                        @if let Some(date) = post.date {
                            small.post-date { (format_date(date)) }
                        }
                        @if let Some(excerpt) = &post.excerpt {
                            p.post-excerpt { (excerpt) }
                        }
                    }
                }
            }
        }
    };

    base_document(None, &site.description, "/", site, css, content)
}

/// Renders a single post page.
fn render_post_page(post: &Post, site: &SiteMetadata, css: &str) -> Markup {
    let description = post.excerpt.as_deref().unwrap_or(&site.description);
    let path = format!("/{}/", post.slug);

    let content = html! {
        article.post {
            header.post-header {
                h2.post-title { (post.title) }
                @if let Some(date) = post.date {
                    small.post-date { (format_date(date)) }
                } @else {
                    small.post-date { "Draft" }
                }
            }
            div.post-body {
                (PreEscaped(markdown_to_html(&post.body)))
            }
        }
    };

    base_document(Some(&post.title), description, &path, site, css, content)
}

/// Renders the contact page: a twitter profile link and a mailto link.
fn render_contact_page(site: &SiteMetadata, css: &str) -> Markup {
    let content = html! {
        section.contact {
            h2.page-title { "Contact" }
            p { "Want to get in touch? Find me on twitter or send an email." }
            ul.contact-links {
                li {
                    a href={ "https://twitter.com/" (site.social.twitter) } {
                        "@" (site.social.twitter)
                    }
                }
                li {
                    a href={ "mailto:" (site.email) } { (site.email) }
                }
            }
        }
    };

    base_document(Some("Contact"), &site.description, "/contact/", site, css, content)
}

/// Renders the resume page from markdown content.
fn render_resume_page(resume: &ResumePage, site: &SiteMetadata, css: &str) -> Markup {
    let content = html! {
        section.resume {
            h2.page-title { (resume.title) }
            div.resume-body {
                (PreEscaped(markdown_to_html(&resume.body)))
            }
        }
    };

    base_document(Some(&resume.title), &site.description, "/resume/", site, css, content)
}

// ============================================================================
// Tests
// ============================================================================
