//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Configuration is a single
//! layer: stock defaults are overridden by an optional user file at the
//! content root. The stock defaults carry the site's real identity, so a
//! config file is only needed to change something.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Andomain"
//! description = "..."
//! author = "Sam Anderson"
//! base_url = "https://andomain.co.uk"
//! email = "sam@andomain.co.uk"
//! bio = "..."               # Markdown, rendered as the index page bio
//!
//! [site.social]
//! twitter = "andomain"
//! github = "andomain"
//!
//! [theme]
//! main = "#252525"          # Body text
//! highlight = "#ff0000"     # Accents (link hover, selection)
//! link = "#af0404"          # Links
//! neutral = "#414141"       # Secondary text (dates, footer)
//! light = "#eee"            # Rules and borders
//! mobile_breakpoint = 768   # Pixel width where the layout stacks
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse, override just the values you want:
//!
//! ```toml
//! # Only override the link color
//! [theme]
//! link = "#0366d6"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! The theme never reaches the templates directly. It is compiled once into
//! CSS custom properties plus a single max-width media query (see
//! [`generate_theme_css`]) and that CSS is inlined into every page, so each
//! component picks its colors up from the same place.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: title, author, contact and social details.
    pub site: SiteMetadata,
    /// Color palette and responsive breakpoint.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMetadata::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.site.author.trim().is_empty() {
            return Err(ConfigError::Validation("site.author must not be empty".into()));
        }
        if !self.site.email.contains('@') {
            return Err(ConfigError::Validation(
                "site.email must be an email address".into(),
            ));
        }
        for (key, value) in [
            ("theme.main", &self.theme.main),
            ("theme.highlight", &self.theme.highlight),
            ("theme.link", &self.theme.link),
            ("theme.neutral", &self.theme.neutral),
            ("theme.light", &self.theme.light),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a hex color like #af0404, got {value:?}"
                )));
            }
        }
        if self.theme.mobile_breakpoint == 0 {
            return Err(ConfigError::Validation(
                "theme.mobile_breakpoint must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity read once per build and passed down to every renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMetadata {
    /// Site title, shown in the header and the document title.
    pub title: String,
    /// Site description for meta tags and the index page.
    pub description: String,
    /// Author name.
    pub author: String,
    /// Absolute site URL, used for canonical and Open Graph URLs.
    pub base_url: String,
    /// Contact email, linked from the contact page.
    pub email: String,
    /// Short biographical paragraph (markdown), shown on the index page.
    pub bio: String,
    /// Social handles.
    pub social: SocialLinks,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Andomain".to_string(),
            description: "The personal blog and portfolio of Sam Anderson, \
                          a fullstack web developer based in Sheffield."
                .to_string(),
            author: "Sam Anderson".to_string(),
            base_url: "https://andomain.co.uk".to_string(),
            email: "sam@andomain.co.uk".to_string(),
            bio: "I'm Sam Anderson, a Fullstack web developer specializing in \
                  building nice things for nice people. I'm currently based in \
                  Sheffield working at [Joi Polloi](https://joipolloi.com/)."
                .to_string(),
            social: SocialLinks::default(),
        }
    }
}

/// Social handles. The contact page links the twitter handle; github is
/// carried through the data model for templates that want it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub twitter: String,
    pub github: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            twitter: "andomain".to_string(),
            github: "andomain".to_string(),
        }
    }
}

/// Color palette and responsive breakpoint.
///
/// Colors are plain CSS hex strings. The breakpoint is the viewport width in
/// pixels below which the header navigation spreads out and the bio stacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Body text color.
    pub main: String,
    /// Accent color (link hover, selection).
    pub highlight: String,
    /// Link color.
    pub link: String,
    /// Secondary text color (dates, footer).
    pub neutral: String,
    /// Rule and border color.
    pub light: String,
    /// Viewport width in pixels where the layout switches to its stacked
    /// mobile arrangement.
    pub mobile_breakpoint: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            main: "#252525".to_string(),
            highlight: "#ff0000".to_string(),
            link: "#af0404".to_string(),
            neutral: "#414141".to_string(),
            light: "#eee".to_string(),
            mobile_breakpoint: 768,
        }
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and
/// explanations. Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Andomain Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the content root (next to posts/ and resume.md).
# Each key only needs to be present when you want to override it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Shown in the header and the document title of every page.
title = "Andomain"

# Meta description for the index page.
description = "The personal blog and portfolio of Sam Anderson, a fullstack web developer based in Sheffield."

# Author name, used in meta tags.
author = "Sam Anderson"

# Absolute site URL, used for canonical and Open Graph URLs.
base_url = "https://andomain.co.uk"

# Contact email, linked from the contact page.
email = "sam@andomain.co.uk"

# Short biographical paragraph for the index page. Markdown.
bio = "I'm Sam Anderson, a Fullstack web developer specializing in building nice things for nice people. I'm currently based in Sheffield working at [Joi Polloi](https://joipolloi.com/)."

# Social handles (bare usernames, not URLs).
[site.social]
twitter = "andomain"
github = "andomain"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Body text color.
main = "#252525"

# Accent color (link hover, selection).
highlight = "#ff0000"

# Link color.
link = "#af0404"

# Secondary text color (dates, footer).
neutral = "#414141"

# Rule and border color.
light = "#eee"

# Viewport width in pixels below which the header navigation spreads out
# evenly and the bio stacks vertically.
mobile_breakpoint = 768
"##
}

/// Generate CSS from theme config: custom properties for the palette plus
/// the responsive media query.
///
/// The breakpoint behavior is pure styling: below the configured width the
/// header links switch from end-aligned to evenly spaced and the bio row
/// becomes a column. No template logic branches on viewport size.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-main: {main};
    --color-highlight: {highlight};
    --color-link: {link};
    --color-neutral: {neutral};
    --color-light: {light};
}}

@media (max-width: {breakpoint}px) {{
    .site-nav {{
        justify-content: space-around;
    }}

    .site-nav a {{
        margin: 0;
    }}

    .bio {{
        flex-direction: column;
    }}
}}"#,
        main = theme.main,
        highlight = theme.highlight,
        link = theme.link,
        neutral = theme.neutral,
        light = theme.light,
        breakpoint = theme.mobile_breakpoint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_theme_palette() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.main, "#252525");
        assert_eq!(config.theme.highlight, "#ff0000");
        assert_eq!(config.theme.link, "#af0404");
        assert_eq!(config.theme.neutral, "#414141");
        assert_eq!(config.theme.light, "#eee");
        assert_eq!(config.theme.mobile_breakpoint, 768);
    }

    #[test]
    fn default_config_site_identity() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "Andomain");
        assert_eq!(config.site.author, "Sam Anderson");
        assert_eq!(config.site.email, "sam@andomain.co.uk");
        assert_eq!(config.site.social.twitter, "andomain");
        assert_eq!(config.site.social.github, "andomain");
        assert!(!config.site.bio.is_empty());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[theme]
link = "#0366d6"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.theme.link, "#0366d6");
        // Default values preserved
        assert_eq!(config.theme.main, "#252525");
        assert_eq!(config.site.title, "Andomain");
    }

    #[test]
    fn parse_site_section() {
        let toml = r#"
[site]
title = "Elsewhere"
email = "me@example.com"

[site.social]
twitter = "someone"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Elsewhere");
        assert_eq!(config.site.email, "me@example.com");
        assert_eq!(config.site.social.twitter, "someone");
        // Unspecified defaults preserved
        assert_eq!(config.site.social.github, "andomain");
        assert_eq!(config.theme.mobile_breakpoint, 768);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();

        assert_eq!(config.site.title, "Andomain");
        assert_eq!(config.theme.mobile_breakpoint, 768);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
title = "Testfolio"

[theme]
mobile_breakpoint = 600
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.title, "Testfolio");
        assert_eq!(config.theme.mobile_breakpoint, 600);
        // Unspecified values should be defaults
        assert_eq!(config.theme.link, "#af0404");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[theme]
link = "red"
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // CSS generation tests
    // =========================================================================

    #[test]
    fn generate_theme_css_includes_all_variables() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("--color-main: #252525"));
        assert!(css.contains("--color-highlight: #ff0000"));
        assert!(css.contains("--color-link: #af0404"));
        assert!(css.contains("--color-neutral: #414141"));
        assert!(css.contains("--color-light: #eee"));
    }

    #[test]
    fn generate_theme_css_media_query_uses_breakpoint() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("@media (max-width: 768px)"));

        let theme = ThemeConfig {
            mobile_breakpoint: 480,
            ..ThemeConfig::default()
        };
        let css = generate_theme_css(&theme);
        assert!(css.contains("@media (max-width: 480px)"));
        assert!(!css.contains("768"));
    }

    #[test]
    fn generate_theme_css_uses_overridden_colors() {
        let theme = ThemeConfig {
            link: "#0366d6".to_string(),
            ..ThemeConfig::default()
        };
        let css = generate_theme_css(&theme);
        assert!(css.contains("--color-link: #0366d6"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"title = "Old""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"title = "New""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("title").unwrap().as_str(), Some("New"));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r##"
[theme]
main = "#252525"
link = "#af0404"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[theme]
link = "#0366d6"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let theme = merged.get("theme").unwrap();
        assert_eq!(theme.get("link").unwrap().as_str(), Some("#0366d6"));
        assert_eq!(theme.get("main").unwrap().as_str(), Some("#252525"));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[site.social]
twitter = "andomain"
github = "andomain"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[site.social]
twitter = "elsewhere"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let social = merged.get("site").unwrap().get("social").unwrap();
        assert_eq!(social.get("twitter").unwrap().as_str(), Some("elsewhere"));
        assert_eq!(social.get("github").unwrap().as_str(), Some("andomain"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[site]
titel = "typo"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r##"
[colors]
main = "#000"
"##;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let toml_str = r#"
[site.social]
mastodon = "someone"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn validate_bad_email() {
        let mut config = SiteConfig::default();
        config.site.email = "not-an-email".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_bad_color() {
        let mut config = SiteConfig::default();
        config.theme.highlight = "red".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme.highlight"));

        config.theme.highlight = "#ff00".to_string();
        assert!(config.validate().is_err());

        config.theme.highlight = "#gggggg".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_short_hex_color_ok() {
        let mut config = SiteConfig::default();
        config.theme.main = "#abc".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_zero_breakpoint() {
        let mut config = SiteConfig::default();
        config.theme.mobile_breakpoint = 0;
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config.site.title, "Andomain");
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
author = "Someone Else"
"#,
        )
        .unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.site.author, "Someone Else");
        // Other fields preserved from defaults
        assert_eq!(config.site.title, "Andomain");
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let overlay: toml::Value = toml::from_str(
            r#"
[theme]
mobile_breakpoint = 0
"#,
        )
        .unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[site.social]"));
        assert!(content.contains("[theme]"));
    }

    #[test]
    fn stock_config_toml_matches_default_palette() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.theme.main, defaults.theme.main);
        assert_eq!(config.theme.highlight, defaults.theme.highlight);
        assert_eq!(config.theme.link, defaults.theme.link);
        assert_eq!(config.theme.neutral, defaults.theme.neutral);
        assert_eq!(config.theme.light, defaults.theme.light);
        assert_eq!(config.theme.mobile_breakpoint, defaults.theme.mobile_breakpoint);
        assert_eq!(config.site.title, defaults.site.title);
        assert_eq!(config.site.email, defaults.site.email);
        assert_eq!(config.site.social.twitter, defaults.site.social.twitter);
    }

    // =========================================================================
    // stock_defaults_value tests
    // =========================================================================

    #[test]
    fn stock_defaults_value_is_table() {
        assert!(stock_defaults_value().is_table());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.get("site").is_some());
        assert!(val.get("theme").is_some());
    }
}
