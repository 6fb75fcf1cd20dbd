//! Chunk-splitting contract handed to the engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::plan::Pattern;
use crate::plan::helpers::{
    default_max_async_requests, default_max_initial_requests, default_min_chunks,
    default_min_size, default_runtime_chunk_name, default_true,
};

/// Modules installed as dependencies, on either separator
pub const VENDOR_MODULES: &str = r"[\\/]node_modules[\\/]";

/// Which chunks are eligible for splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    All,
    Async,
    #[default]
    Initial,
}

/// How a chunk is requested by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Requested on demand (dynamic import)
    Async,
    /// Requested at initial page load
    Initial,
}

/// Shared-chunk extraction thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitChunks {
    #[serde(default)]
    pub chunks: ChunkScope,

    /// Minimum size (bytes) of shared code before it is extracted
    #[serde(default = "default_min_size")]
    pub min_size: u64,

    /// Minimum number of entry points that must reference the code
    #[serde(default = "default_min_chunks")]
    pub min_chunks: usize,

    /// Upper bound on parallel on-demand requests
    #[serde(default = "default_max_async_requests")]
    pub max_async_requests: usize,

    /// Upper bound on parallel requests at initial load
    #[serde(default = "default_max_initial_requests")]
    pub max_initial_requests: usize,

    /// Let the engine name split chunks after their cache group
    #[serde(default = "default_true")]
    pub name: bool,

    /// Named buckets shared code is sorted into
    #[serde(default = "default_cache_groups")]
    pub cache_groups: IndexMap<String, CacheGroup>,
}

impl Default for SplitChunks {
    fn default() -> Self {
        Self {
            chunks: ChunkScope::default(),
            min_size: default_min_size(),
            min_chunks: default_min_chunks(),
            max_async_requests: default_max_async_requests(),
            max_initial_requests: default_max_initial_requests(),
            name: true,
            cache_groups: default_cache_groups(),
        }
    }
}

/// A bucket for shared code. The highest-priority group whose `test`
/// matches a module claims it; a group without `test` matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheGroup {
    /// Chunk name emitted for this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<Pattern>,

    /// Overrides [`SplitChunks::min_chunks`] for this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_chunks: Option<usize>,

    #[serde(default)]
    pub priority: i32,

    /// Reuse an existing chunk holding exactly these modules
    #[serde(default)]
    pub reuse_existing_chunk: bool,
}

impl CacheGroup {
    pub fn matches(&self, module_path: &str) -> bool {
        self.test
            .as_ref()
            .is_none_or(|test| test.is_match(module_path))
    }
}

/// `vendors` for installed dependencies, `default` for everything else
/// shared by at least two entries.
pub(crate) fn default_cache_groups() -> IndexMap<String, CacheGroup> {
    IndexMap::from([
        (
            "default".to_string(),
            CacheGroup {
                name: Some("default".to_string()),
                test: None,
                min_chunks: Some(2),
                priority: -20,
                reuse_existing_chunk: true,
            },
        ),
        (
            "vendors".to_string(),
            CacheGroup {
                name: Some("vendors".to_string()),
                test: Pattern::new(VENDOR_MODULES).ok(),
                min_chunks: None,
                priority: -10,
                reuse_existing_chunk: false,
            },
        ),
    ])
}

impl SplitChunks {
    /// Whether code of `size` bytes referenced by `referencing_entries` entry
    /// points goes into a shared chunk.
    pub fn qualifies(&self, size: u64, referencing_entries: usize) -> bool {
        size >= self.min_size && referencing_entries >= self.min_chunks
    }

    /// Whether `requested` parallel chunk requests fit the budget for `kind`.
    pub fn admits(&self, kind: LoadKind, requested: usize) -> bool {
        match kind {
            LoadKind::Async => requested <= self.max_async_requests,
            LoadKind::Initial => requested <= self.max_initial_requests,
        }
    }

    /// Key of the cache group that claims `module_path`.
    ///
    /// Higher priority wins; on a tie the group declared first wins.
    pub fn cache_group_for(&self, module_path: &str) -> Option<&str> {
        let mut best: Option<(&String, &CacheGroup)> = None;
        for (key, group) in &self.cache_groups {
            if !group.matches(module_path) {
                continue;
            }
            if best.is_none_or(|(_, current)| group.priority > current.priority) {
                best = Some((key, group));
            }
        }
        best.map(|(key, _)| key.as_str())
    }

    /// Entry-reference threshold in effect for the group `key`.
    pub fn min_chunks_for(&self, key: &str) -> usize {
        self.cache_groups
            .get(key)
            .and_then(|group| group.min_chunks)
            .unwrap_or(self.min_chunks)
    }
}

/// The runtime chunk, always emitted apart from application code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeChunk {
    #[serde(default = "default_runtime_chunk_name")]
    pub name: String,
}

impl Default for RuntimeChunk {
    fn default() -> Self {
        Self {
            name: default_runtime_chunk_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_code_needs_two_entries_and_thirty_kb() {
        let split = SplitChunks::default();
        assert!(split.qualifies(30_000, 2));
        assert!(!split.qualifies(29_999, 5));
        assert!(!split.qualifies(100_000, 1));
    }

    #[test]
    fn request_budgets() {
        let split = SplitChunks::default();
        assert!(split.admits(LoadKind::Async, 5));
        assert!(!split.admits(LoadKind::Async, 6));
        assert!(split.admits(LoadKind::Initial, 3));
        assert!(!split.admits(LoadKind::Initial, 4));
    }

    #[test]
    fn only_initial_chunks_are_split_by_default() {
        let split = SplitChunks::default();
        assert_eq!(split.chunks, ChunkScope::Initial);
        assert!(split.name);
    }

    #[test]
    fn dependencies_land_in_vendors() {
        let split = SplitChunks::default();
        assert_eq!(split.cache_group_for("/app/node_modules/react/index.js"), Some("vendors"));
        assert_eq!(split.cache_group_for(r"C:\app\node_modules\react\index.js"), Some("vendors"));
        assert_eq!(split.cache_group_for("/app/src/renderer/util.js"), Some("default"));
    }

    #[test]
    fn default_group_settings() {
        let split = SplitChunks::default();
        let default = &split.cache_groups["default"];
        assert_eq!(default.priority, -20);
        assert!(default.reuse_existing_chunk);
        assert_eq!(split.min_chunks_for("default"), 2);

        let vendors = &split.cache_groups["vendors"];
        assert_eq!(vendors.priority, -10);
        assert_eq!(vendors.name.as_deref(), Some("vendors"));
        assert_eq!(vendors.test.as_ref().map(Pattern::as_str), Some(VENDOR_MODULES));
        assert_eq!(split.min_chunks_for("vendors"), split.min_chunks);
    }

    #[test]
    fn cache_groups_serialize_with_their_patterns() {
        let value = serde_json::to_value(SplitChunks::default()).unwrap();
        assert_eq!(value["chunks"], "initial");
        assert_eq!(value["cache_groups"]["vendors"]["test"], VENDOR_MODULES);
        assert!(value["cache_groups"]["default"].get("test").is_none());
    }

    #[test]
    fn runtime_chunk_has_fixed_name() {
        assert_eq!(RuntimeChunk::default().name, "runtime");
    }
}
