use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::plan::helpers::{default_html_filename, default_true};

/// HTML page generated around the bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlPage {
    /// Output filename for generated HTML (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,

    /// Page template, relative to the project root
    pub template: PathBuf,

    #[serde(default)]
    pub minify: HtmlMinify,

    /// Whether the template may load scripts from `node_modules` directly.
    /// Renderer pages are fully bundled, so this stays off.
    #[serde(default)]
    pub node_modules: bool,
}

impl HtmlPage {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            filename: default_html_filename(),
            template: template.into(),
            minify: HtmlMinify::default(),
            node_modules: false,
        }
    }
}

/// Markup minification switches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlMinify {
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,

    #[serde(default = "default_true")]
    pub remove_attribute_quotes: bool,

    #[serde(default = "default_true")]
    pub remove_comments: bool,
}

impl Default for HtmlMinify {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            remove_attribute_quotes: true,
            remove_comments: true,
        }
    }
}
