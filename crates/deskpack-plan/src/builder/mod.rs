//! Plan construction.
//!
//! A build runs [`build_base_plan`] once, [`apply_environment_overlay`] once,
//! and hands the result to the engine. [`build_plan`] does all three steps
//! including reading the host manifest.

mod overlay;
pub mod rules;

use indexmap::IndexMap;

use crate::config::ProjectConfig;
use crate::environment::Environment;
use crate::error::Result;
use crate::manifest::HostManifest;
use crate::plan::{
    HtmlPage, NodeGlobals, Optimization, OutputOptions, Plan, PluginDirective, ResolveOptions,
    RuntimeChunk, SourceMapMode, default_css_filename, normalize_path,
};
use crate::validation::validate_fs;

pub use overlay::apply_environment_overlay;
pub use rules::default_rules;

/// Import prefix resolved to the renderer source directory
pub const SOURCE_ALIAS: &str = "@";

/// Build the environment-independent skeleton of a plan.
///
/// # Errors
///
/// Fails if the config is invalid, an entry does not resolve to an existing
/// file, or a rule pattern does not compile.
pub fn build_base_plan(config: &ProjectConfig, manifest: &HostManifest) -> Result<Plan> {
    validate_fs(config)?;

    let plugins = vec![
        PluginDirective::ExtractCss {
            filename: default_css_filename(),
        },
        PluginDirective::Html(HtmlPage::new(&config.template)),
        PluginDirective::HotReload,
        PluginDirective::NoEmitOnErrors,
    ];

    let externals = manifest.externals(config.bundled_dependencies.as_slice());
    tracing::debug!(
        externals = externals.len(),
        bundled = config.bundled_dependencies.len(),
        "resolved externals"
    );

    Ok(Plan {
        environment: None,
        target: config.target.clone(),
        context: config.root.clone(),
        static_dir: config.static_dir.clone(),
        entries: config.entries.clone(),
        output: OutputOptions {
            path: config.output_dir.clone(),
            ..OutputOptions::default()
        },
        rules: default_rules(config.inline_limit)?,
        plugins,
        resolve: ResolveOptions {
            alias: aliases(config),
            extensions: config.extensions.clone(),
        },
        externals,
        optimization: Optimization {
            minimize: false,
            split_chunks: config.split_chunks.clone(),
            runtime_chunk: RuntimeChunk::default(),
        },
        source_maps: SourceMapMode::CheapModuleEval,
        node: NodeGlobals::default(),
    })
}

/// `@` points at the renderer source directory; configured aliases follow
/// and may replace it.
fn aliases(config: &ProjectConfig) -> IndexMap<String, String> {
    let mut alias = IndexMap::from([(SOURCE_ALIAS.to_string(), normalize_path(&config.source_dir))]);
    alias.extend(config.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));
    alias
}

/// Build a complete plan for `env`: base plan, overlay, then the project's
/// own plugins.
pub fn build_plan(config: &ProjectConfig, env: Environment) -> Result<Plan> {
    let manifest = HostManifest::load(config.manifest_path())?;
    build_plan_with_manifest(config, &manifest, env)
}

/// [`build_plan`] with an already-loaded manifest.
pub fn build_plan_with_manifest(
    config: &ProjectConfig,
    manifest: &HostManifest,
    env: Environment,
) -> Result<Plan> {
    let base = build_base_plan(config, manifest)?;
    let mut plan = apply_environment_overlay(base, env);

    plan.plugins.extend(
        config
            .plugins
            .iter()
            .filter(|plugin| plugin.enabled)
            .map(|plugin| PluginDirective::Custom {
                name: plugin.name.clone(),
                config: plugin.config.clone(),
            }),
    );

    tracing::info!(
        %env,
        entries = plan.entries.len(),
        rules = plan.rules.len(),
        plugins = plan.plugins.len(),
        externals = plan.externals.len(),
        "plan ready"
    );

    Ok(plan)
}
