//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Result, bail};

use crate::builders::LabelOptions;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default required marker for labels (FORMKIT_REQUIRED_HTML, default: empty).
    pub required_html: String,

    /// Whether the required marker precedes the label text
    /// (FORMKIT_REQUIRED_POSITION: "before" or "after", default: "before").
    pub required_before_text: bool,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required_html = lookup("FORMKIT_REQUIRED_HTML").unwrap_or_default();

        let position = lookup("FORMKIT_REQUIRED_POSITION")
            .unwrap_or_else(|| "before".to_string())
            .to_lowercase();
        let required_before_text = match position.trim() {
            "before" => true,
            "after" => false,
            other => bail!("FORMKIT_REQUIRED_POSITION must be 'before' or 'after', got '{other}'"),
        };

        Ok(Self {
            required_html,
            required_before_text,
        })
    }

    /// Label options carrying the configured required marker.
    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            required_html: self.required_html.clone(),
            before_text: self.required_before_text,
        }
    }
}
