use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::plan::html::HtmlPage;

/// Global constant the development overlay defines for the unbundled static directory
pub const STATIC_CONSTANT: &str = "__static";

/// Global constant carrying the environment name in production builds
pub const NODE_ENV_CONSTANT: &str = "process.env.NODE_ENV";

/// A plugin directive for the engine.
///
/// Serialized as `{ "plugin": <name>, ...config }`. Order is significant only
/// between directives that mutate the same artifact (e.g. the HTML page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginDirective {
    /// Compile-time global constants. Values are expression source text.
    Define { constants: IndexMap<String, String> },

    /// Copy a directory verbatim into the output tree
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[serde(default)]
        ignore: Vec<String>,
    },

    /// Minify emitted scripts
    Minify,

    /// Generate the HTML page
    Html(HtmlPage),

    /// Extract styles into a standalone stylesheet
    ExtractCss { filename: String },

    /// Hot module replacement runtime
    HotReload,

    /// Skip emitting when compilation reports errors
    NoEmitOnErrors,

    /// Options forwarded to every transform
    LoaderOptions { minimize: bool },

    /// Project-declared plugin, passed through as-is
    Custom {
        name: String,
        #[serde(default)]
        config: Value,
    },
}

impl PluginDirective {
    /// Wire name of the directive.
    pub fn name(&self) -> &str {
        match self {
            Self::Define { .. } => "define",
            Self::Copy { .. } => "copy",
            Self::Minify => "minify",
            Self::Html(_) => "html",
            Self::ExtractCss { .. } => "extract-css",
            Self::HotReload => "hot-reload",
            Self::NoEmitOnErrors => "no-emit-on-errors",
            Self::LoaderOptions { .. } => "loader-options",
            Self::Custom { name, .. } => name.as_str(),
        }
    }

    /// Single-constant `define` directive.
    pub fn define(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Define {
            constants: IndexMap::from([(key.into(), value.into())]),
        }
    }

    /// `define` directive pointing [`STATIC_CONSTANT`] at `dir`.
    ///
    /// The value is a quoted string literal with backslashes escaped, so
    /// Windows paths survive substitution.
    pub fn define_static(dir: &Path) -> Self {
        let escaped = dir.to_string_lossy().replace('\\', "\\\\");
        Self::define(STATIC_CONSTANT, format!("\"{escaped}\""))
    }

    /// Copy `from` into `to`, skipping dotfiles.
    pub fn copy_static(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self::Copy {
            from: from.into(),
            to: to.into(),
            ignore: vec![".*".to_string()],
        }
    }

    /// Whether this directive defines global constant `key`.
    pub fn defines(&self, key: &str) -> bool {
        matches!(self, Self::Define { constants } if constants.contains_key(key))
    }
}
