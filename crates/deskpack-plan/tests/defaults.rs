//! Tests for default values and edge cases.

use deskpack_plan::{
    AssetNamespace, ChunkScope, DEFAULT_INLINE_LIMIT, HtmlMinify, NodeGlobals, OutputOptions,
    ProjectConfig, Rule, RuntimeChunk, SourceMapMode, SplitChunks, UnmatchedPolicy,
    default_rules, normalize_path, select_rule,
};
use std::path::PathBuf;

#[test]
fn project_config_defaults() {
    let config = ProjectConfig::default();
    assert_eq!(config.entries.len(), 1);
    assert_eq!(config.source_dir, PathBuf::from("src/renderer"));
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert_eq!(config.output_dir, PathBuf::from("dist/electron"));
    assert_eq!(config.template, PathBuf::from("src/index.ejs"));
    assert_eq!(config.manifest, PathBuf::from("package.json"));
    assert_eq!(config.target, "electron-renderer");
    assert_eq!(config.unmatched, UnmatchedPolicy::PassThrough);
    assert!(config.plugins.is_empty());
    assert!(config.profiles.is_empty());
}

#[test]
fn alias_and_extension_defaults() {
    let config = ProjectConfig::default();
    assert!(config.aliases.is_empty());
    assert_eq!(config.extensions, [".js", ".jsx", ".json", ".css", ".node"]);
    assert_eq!(config.bundled_dependencies, ["React"]);
    assert_eq!(config.entries["renderer"], PathBuf::from("src/start.js"));
}

#[test]
fn split_chunk_defaults() {
    let split = SplitChunks::default();
    assert_eq!(split.chunks, ChunkScope::Initial);
    assert!(split.name);
    assert_eq!(split.cache_groups.len(), 2);
    assert_eq!(split.min_size, 30_000);
    assert_eq!(split.min_chunks, 2);
    assert_eq!(split.max_async_requests, 5);
    assert_eq!(split.max_initial_requests, 3);
    assert_eq!(RuntimeChunk::default().name, "runtime");
}

#[test]
fn output_and_engine_defaults() {
    let output = OutputOptions::default();
    assert_eq!(output.filename, "[name].js");
    assert_eq!(output.library_target, "commonjs2");

    assert_eq!(SourceMapMode::default(), SourceMapMode::CheapModuleEval);
    let node = NodeGlobals::default();
    assert!(node.dirname && node.filename);

    let minify = HtmlMinify::default();
    assert!(minify.collapse_whitespace && minify.remove_attribute_quotes && minify.remove_comments);
}

#[test]
fn asset_namespace_defaults() {
    assert_eq!(DEFAULT_INLINE_LIMIT, 10_000);
    assert_eq!(AssetNamespace::Imgs.template(), "imgs/[name]--[folder].[ext]");
    assert_eq!(AssetNamespace::Media.template(), "media/[name]--[folder].[ext]");
    assert_eq!(AssetNamespace::Fonts.template(), "fonts/[name]--[folder].[ext]");
}

fn loaders(rules: &[Rule], path: &str) -> Option<Vec<String>> {
    select_rule(path, rules)
        .ok()
        .map(|chain| chain.iter().map(|t| t.loader.clone()).collect())
}

#[test]
fn default_rule_table_covers_renderer_sources() {
    let rules = default_rules(DEFAULT_INLINE_LIMIT).expect("rules");

    assert_eq!(
        loaders(&rules, "src/renderer/main.js").unwrap(),
        ["eslint-loader", "babel-loader"]
    );
    assert_eq!(loaders(&rules, "src/renderer/App.jsx").unwrap(), ["eslint-loader"]);
    assert_eq!(loaders(&rules, "src/index.html").unwrap(), ["html-loader"]);
    assert_eq!(loaders(&rules, "native/addon.node").unwrap(), ["node-loader"]);
    assert_eq!(loaders(&rules, "fonts/icons.woff2").unwrap(), ["url-loader"]);
    assert_eq!(loaders(&rules, "README.md"), None);
}

#[test]
fn every_stylesheet_dialect_has_a_chain() {
    let rules = default_rules(DEFAULT_INLINE_LIMIT).expect("rules");

    assert_eq!(loaders(&rules, "src/renderer/theme.styl").unwrap(), ["stylus-loader"]);
    assert_eq!(
        loaders(&rules, "src/renderer/theme.scss").unwrap(),
        ["css-loader", "sass-loader"]
    );
    assert_eq!(
        loaders(&rules, "src/renderer/theme.sass").unwrap(),
        ["css-loader", "sass-loader"]
    );
    assert_eq!(
        loaders(&rules, "styles/theme.less").unwrap(),
        ["css-loader", "less-loader"]
    );
    assert_eq!(
        loaders(&rules, "styles/base.css").unwrap(),
        ["style-loader", "css-loader"]
    );
}

#[test]
fn only_the_lint_rule_runs_before_the_others() {
    let rules = default_rules(DEFAULT_INLINE_LIMIT).expect("rules");
    let pre: Vec<_> = rules.iter().filter(|rule| rule.is_pre()).collect();
    assert_eq!(pre.len(), 1);
    assert_eq!(pre[0].chain[0].loader, "eslint-loader");
    assert!(rules[0].is_pre());
}

#[test]
fn vendored_scripts_skip_transpilation() {
    let rules = default_rules(DEFAULT_INLINE_LIMIT).expect("rules");
    assert!(select_rule("node_modules/lodash/index.js", &rules).is_err());
    assert!(select_rule("src/node_modules_helper.js", &rules).is_ok());
}

#[test]
fn windows_paths_are_normalized() {
    assert_eq!(normalize_path(r"src\renderer\App.jsx"), "src/renderer/App.jsx");
}
