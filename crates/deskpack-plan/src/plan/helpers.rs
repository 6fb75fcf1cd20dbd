use indexmap::IndexMap;
use std::path::PathBuf;

/// Assets strictly smaller than this are inlined as data URIs
pub const DEFAULT_INLINE_LIMIT: u64 = 10_000;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist/electron")
}

pub(crate) fn default_filename() -> String {
    "[name].js".to_string()
}

pub(crate) fn default_library_target() -> String {
    "commonjs2".to_string()
}

pub(crate) fn default_target() -> String {
    "electron-renderer".to_string()
}

pub(crate) fn default_min_size() -> u64 {
    30_000
}

pub(crate) fn default_min_chunks() -> usize {
    2
}

pub(crate) fn default_max_async_requests() -> usize {
    5
}

pub(crate) fn default_max_initial_requests() -> usize {
    3
}

pub(crate) fn default_runtime_chunk_name() -> String {
    "runtime".to_string()
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_css_filename() -> String {
    "styles.css".to_string()
}

pub(crate) fn default_inline_limit() -> u64 {
    DEFAULT_INLINE_LIMIT
}

pub(crate) fn default_entries() -> IndexMap<String, PathBuf> {
    IndexMap::from([(
        "renderer".to_string(),
        PathBuf::from("src/start.js"),
    )])
}

pub(crate) fn default_source_dir() -> PathBuf {
    PathBuf::from("src/renderer")
}

pub(crate) fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

pub(crate) fn default_template() -> PathBuf {
    PathBuf::from("src/index.ejs")
}

pub(crate) fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

pub(crate) fn default_bundled_dependencies() -> Vec<String> {
    vec!["React".to_string()]
}

pub(crate) fn default_extensions() -> Vec<String> {
    [".js", ".jsx", ".json", ".css", ".node"]
        .into_iter()
        .map(String::from)
        .collect()
}
