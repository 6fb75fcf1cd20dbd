use serde::{Deserialize, Serialize};

/// Source map / debug output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// No source maps
    None,
    /// Fast eval-wrapped maps with original module lines
    #[default]
    CheapModuleEval,
}

/// Whether Node's module-path globals keep their real values in the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGlobals {
    pub dirname: bool,
    pub filename: bool,
}

impl Default for NodeGlobals {
    fn default() -> Self {
        Self {
            dirname: true,
            filename: true,
        }
    }
}
