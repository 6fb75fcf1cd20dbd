//! The default rule table for a renderer process.
//!
//! Regular rules are matched first-match-wins, so a broad rule must come after
//! the specific rules it overlaps with. The lint rule is enforced `pre` and
//! runs ahead of whichever regular rule is selected.

use crate::error::Result;
use crate::plan::{AssetNamespace, Enforce, Pattern, Rule, Transform};

pub const ESLINT_LOADER: &str = "eslint-loader";
pub const BABEL_LOADER: &str = "babel-loader";
pub const NODE_LOADER: &str = "node-loader";
pub const STYLUS_LOADER: &str = "stylus-loader";
pub const STYLE_LOADER: &str = "style-loader";
pub const CSS_LOADER: &str = "css-loader";
pub const SASS_LOADER: &str = "sass-loader";
pub const LESS_LOADER: &str = "less-loader";
pub const HTML_LOADER: &str = "html-loader";

/// Lint report formatter handed to [`ESLINT_LOADER`]
pub const LINT_FORMATTER: &str = "eslint-friendly-formatter";

const NODE_MODULES: &str = r"(^|/)node_modules/";
const SOURCE_TREE: &str = r"(^|/)src/";

/// Build the rule table. `inline_limit` is the asset inlining threshold in bytes.
pub fn default_rules(inline_limit: u64) -> Result<Vec<Rule>> {
    let mut rules = vec![
        Rule::new(
            Pattern::new(r"\.jsx?$")?,
            vec![Transform::new(ESLINT_LOADER).with_option("formatter", LINT_FORMATTER)],
        )
        .enforced(Enforce::Pre)
        .excluding(Pattern::new(NODE_MODULES)?)
        .including(Pattern::new(SOURCE_TREE)?),
        Rule::new(Pattern::new(r"\.js$")?, vec![Transform::new(BABEL_LOADER)])
            .excluding(Pattern::new(NODE_MODULES)?),
        Rule::new(Pattern::new(r"\.node$")?, vec![Transform::new(NODE_LOADER)]),
        Rule::new(Pattern::new(r"\.styl(us)?$")?, vec![Transform::new(STYLUS_LOADER)]),
        Rule::new(
            Pattern::new(r"\.scss$")?,
            vec![Transform::new(CSS_LOADER), Transform::new(SASS_LOADER)],
        ),
        Rule::new(
            Pattern::new(r"\.sass$")?,
            vec![
                Transform::new(CSS_LOADER),
                Transform::new(SASS_LOADER).with_option("indentedSyntax", true),
            ],
        ),
        Rule::new(
            Pattern::new(r"\.less$")?,
            vec![Transform::new(CSS_LOADER), Transform::new(LESS_LOADER)],
        ),
        Rule::new(
            Pattern::new(r"\.css$")?,
            vec![Transform::new(STYLE_LOADER), Transform::new(CSS_LOADER)],
        ),
        Rule::new(Pattern::new(r"\.html$")?, vec![Transform::new(HTML_LOADER)]),
    ];

    for namespace in AssetNamespace::ALL {
        rules.push(Rule::new(
            Pattern::new(namespace.pattern())?,
            vec![namespace.transform(inline_limit)],
        ));
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::select_rule;

    fn loaders(path: &str) -> Vec<String> {
        let rules = default_rules(10_000).unwrap();
        select_rule(path, &rules)
            .unwrap()
            .iter()
            .map(|t| t.loader.clone())
            .collect()
    }

    #[test]
    fn scripts_are_linted_then_transpiled() {
        assert_eq!(loaders("src/renderer/main.js"), [ESLINT_LOADER, BABEL_LOADER]);
        assert_eq!(loaders("src/renderer/App.jsx"), [ESLINT_LOADER]);
        assert_eq!(loaders("scripts/release.js"), [BABEL_LOADER]);
    }

    #[test]
    fn lint_rule_passes_its_formatter() {
        let rules = default_rules(10_000).unwrap();
        let chain = select_rule("src/App.jsx", &rules).unwrap();
        assert_eq!(
            chain[0].option("formatter").and_then(|v| v.as_str()),
            Some(LINT_FORMATTER)
        );
    }

    #[test]
    fn stylesheets_route_by_dialect() {
        assert_eq!(loaders("src/theme.styl"), [STYLUS_LOADER]);
        assert_eq!(loaders("src/theme.stylus"), [STYLUS_LOADER]);
        assert_eq!(loaders("src/theme.scss"), [CSS_LOADER, SASS_LOADER]);
        assert_eq!(loaders("src/theme.sass"), [CSS_LOADER, SASS_LOADER]);
        assert_eq!(loaders("src/theme.less"), [CSS_LOADER, LESS_LOADER]);
        assert_eq!(loaders("a.css"), [STYLE_LOADER, CSS_LOADER]);
    }

    #[test]
    fn indented_sass_is_flagged() {
        let rules = default_rules(10_000).unwrap();
        let sass = select_rule("a.sass", &rules).unwrap();
        assert_eq!(sass[1].option("indentedSyntax"), Some(&serde_json::Value::Bool(true)));
        let scss = select_rule("a.scss", &rules).unwrap();
        assert!(scss[1].options.is_empty());
    }

    #[test]
    fn other_sources_route_to_their_loaders() {
        assert_eq!(loaders("build/Release/addon.node"), [NODE_LOADER]);
        assert_eq!(loaders("src/index.html"), [HTML_LOADER]);
    }

    #[test]
    fn dependencies_skip_lint_and_transpiler() {
        let rules = default_rules(10_000).unwrap();
        assert!(select_rule("node_modules/axios/index.js", &rules).is_err());
        assert!(select_rule("src/node_modules/x/index.jsx", &rules).is_err());
    }

    #[test]
    fn assets_route_to_url_loader() {
        assert_eq!(loaders("src/assets/logo.png"), ["url-loader"]);
        assert_eq!(loaders("static/intro.mp4"), ["url-loader"]);
        assert_eq!(loaders("fonts/icons.woff2?v=1"), ["url-loader"]);
    }
}
