//! The plan: a complete declarative description of one build, handed to the
//! bundling engine.

pub mod asset;
mod helpers;
mod html;
mod output;
mod plugin;
mod rule;
mod split;
mod types;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub use asset::{AssetNamespace, AssetOutput};
pub use helpers::DEFAULT_INLINE_LIMIT;
pub use html::{HtmlMinify, HtmlPage};
pub use output::OutputOptions;
pub use plugin::{NODE_ENV_CONSTANT, PluginDirective, STATIC_CONSTANT};
pub use rule::{
    Enforce, Pattern, Resolution, Rule, Transform, UnmatchedPolicy, normalize_path, select_rule,
    select_rule_index,
};
pub use split::{CacheGroup, ChunkScope, LoadKind, RuntimeChunk, SplitChunks, VENDOR_MODULES};
pub use types::{NodeGlobals, SourceMapMode};

pub(crate) use helpers::*;

use crate::environment::Environment;
use crate::error::NoMatchingRule;

/// Module resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Import prefix → replacement (a trailing `$` means exact match)
    #[serde(default)]
    pub alias: IndexMap<String, String>,

    /// Extensions tried, in order, for extensionless imports
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Output optimization settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(default)]
    pub minimize: bool,

    #[serde(default)]
    pub split_chunks: SplitChunks,

    #[serde(default)]
    pub runtime_chunk: RuntimeChunk,
}

/// A build plan.
///
/// Built once per invocation by [`crate::build_base_plan`], extended once by
/// [`crate::apply_environment_overlay`], then treated as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Set by the environment overlay; `None` on a base plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,

    /// Engine target platform
    #[serde(default = "default_target")]
    pub target: String,

    /// Project root; relative paths in the plan resolve against it
    pub context: PathBuf,

    /// Static assets directory, relative to `context`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Entry points: chunk name → source path
    pub entries: IndexMap<String, PathBuf>,

    #[serde(default)]
    pub output: OutputOptions,

    /// Ordered rule table; first match wins
    #[serde(default)]
    pub rules: Vec<Rule>,

    #[serde(default)]
    pub plugins: Vec<PluginDirective>,

    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Packages left for the runtime to provide
    #[serde(default)]
    pub externals: BTreeSet<String>,

    #[serde(default)]
    pub optimization: Optimization,

    #[serde(default)]
    pub source_maps: SourceMapMode,

    #[serde(default)]
    pub node: NodeGlobals,
}

impl Plan {
    /// Transform chain for `path` under `policy`.
    pub fn resolve<'a>(
        &'a self,
        path: &str,
        policy: UnmatchedPolicy,
    ) -> Result<Resolution<'a>, NoMatchingRule> {
        match select_rule(path, &self.rules) {
            Ok(chain) => {
                tracing::debug!(path, loaders = chain.len(), "rule matched");
                Ok(Resolution::Chain(chain))
            }
            Err(miss) => match policy {
                UnmatchedPolicy::PassThrough => {
                    tracing::debug!(path, "no rule matched, passing through");
                    Ok(Resolution::PassThrough)
                }
                UnmatchedPolicy::Fail => Err(miss),
            },
        }
    }

    /// Inline-or-emit decision for an asset, driven by the matched rule's
    /// `url-loader` transform. `None` if the asset is not handled by one.
    pub fn resolve_asset(&self, path: &str, contents: &[u8]) -> Option<AssetOutput> {
        let chain = select_rule(path, &self.rules).ok()?;
        chain
            .iter()
            .find_map(|transform| asset::apply_url_loader(transform, path, contents))
    }

    /// Directives with wire name `name`, in order.
    pub fn plugins_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PluginDirective> + 'a {
        self.plugins.iter().filter(move |plugin| plugin.name() == name)
    }

    /// Whether any directive defines global constant `key`.
    pub fn defines(&self, key: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.defines(key))
    }

    /// Static assets directory joined onto the project root.
    pub fn static_path(&self) -> PathBuf {
        self.context.join(&self.static_dir)
    }

    /// Serialize to a JSON value for the engine.
    pub fn to_value(&self) -> crate::Result<Value> {
        serde_json::to_value(self).map_err(|e| crate::PlanError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Parse a plan previously produced by [`Plan::to_value`].
    pub fn from_value(value: Value) -> crate::Result<Self> {
        serde_json::from_value(value).map_err(|e| crate::PlanError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
