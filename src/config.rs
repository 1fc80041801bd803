//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a depindocs.toml, and if present we load
//! settings from there. This provides the content wrap width, the scroll
//! margin reserved under the sticky header, file extension preferences and
//! the code highlighting theme.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// Reader preferences loaded from depindocs.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for rendered article text.
    pub wrap_width: usize,
    #[facet(default = 4)]
    /// Lines reserved under the sticky header when resolving heading positions.
    pub scroll_margin: usize,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning the content directory.
    pub file_extensions: Vec<String>,
    #[facet(default = "base16-ocean.dark".to_string())]
    /// Syntect theme used for fenced code blocks.
    pub syntax_theme: String,
}

impl Config {
    #[must_use]
    /// Load configuration from depindocs.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("depindocs.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
