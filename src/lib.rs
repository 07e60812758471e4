//! # Andomain
//!
//! A minimal static site generator for a personal blog and portfolio.
//! Your filesystem is the data source: markdown files become posts, the
//! filename carries the publication date, and one TOML file describes the
//! site and its theme.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content is processed in two independent stages, joined by a JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **One data pass**: all site data (metadata, theme, posts) is resolved
//!   up front; the templates are pure functions over that data and never
//!   fetch anything themselves.
//! - **Testability**: each stage is a plain function, so tests can exercise
//!   the pipeline without a full build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1, reads posts and the resume, validates slugs, produces the manifest |
//! | [`generate`] | Stage 2, renders the final HTML site from the manifest using Maud |
//! | [`config`] | `config.toml` loading, validation, and theme CSS generation |
//! | [`types`] | Shared types serialized between stages (`Post`, `ResumePage`) |
//! | [`naming`] | `YYYY-MM-DD-slug` filename convention parser |
//! | [`metadata`] | Post title and excerpt resolution from markdown bodies |
//! | [`output`] | CLI output formatting, inventory display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed HTML is a
//! build error, template variables are Rust expressions, all interpolation
//! is auto-escaped, and there is no template directory to ship or get out
//! of sync.
//!
//! ## Dates In Filenames
//!
//! Posts are named `YYYY-MM-DD-slug.md`. The filename is the source of
//! truth for ordering and URLs; there is no front matter block to parse and
//! nothing to keep in sync. Files without a date prefix are drafts: built
//! and reachable by direct URL, but left off the index listing.
//!
//! ## One Config, Loaded Once
//!
//! Site identity and theme live in a single `config.toml` with stock
//! defaults. The merged config is resolved once at scan time and passed
//! down to every renderer as a plain parameter. The theme reaches the
//! markup only as generated CSS custom properties plus one media query, so
//! changing the palette or the mobile breakpoint never touches a template.
//!
//! ## Plain HTML Out
//!
//! The output is static HTML with the stylesheet inlined per page. No
//! client-side runtime, no build artifacts to serve specially; the `dist/`
//! directory can be dropped on any file server.

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;
