use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::plan::helpers::{default_filename, default_library_target, default_output_dir};

/// Where and how bundled chunks are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub path: PathBuf,

    /// Chunk file naming template; `[name]` is the logical chunk name
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Module format of emitted chunks
    #[serde(default = "default_library_target")]
    pub library_target: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: default_output_dir(),
            filename: default_filename(),
            library_target: default_library_target(),
        }
    }
}

impl OutputOptions {
    /// File name the engine emits for a chunk.
    pub fn render_filename(&self, chunk: &str) -> String {
        self.filename.replace("[name]", chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_name_substitution() {
        let output = OutputOptions::default();
        assert_eq!(output.render_filename("renderer"), "renderer.js");
        assert_eq!(output.render_filename("runtime"), "runtime.js");
    }
}
