//! Environment-specific additions to a base plan.

use crate::environment::Environment;
use crate::plan::{NODE_ENV_CONSTANT, NodeGlobals, Plan, PluginDirective, SourceMapMode};

/// Return `plan` extended for `env`.
///
/// Meant to run once per build. It is not idempotent: applying it twice
/// appends the environment's directives twice.
///
/// - development: defines the static-path constant so the app reads assets
///   from the unbundled directory.
/// - production: turns off source maps, then appends minification, a copy of
///   the static directory (dotfiles excluded) and the `NODE_ENV` constant.
pub fn apply_environment_overlay(mut plan: Plan, env: Environment) -> Plan {
    if let Some(previous) = plan.environment {
        tracing::warn!(%previous, %env, "environment overlay applied more than once");
    }

    match env {
        Environment::Development => overlay_development(&mut plan),
        Environment::Production => overlay_production(&mut plan),
    }

    plan.environment = Some(env);
    tracing::debug!(%env, plugins = plan.plugins.len(), "applied environment overlay");
    plan
}

fn overlay_development(plan: &mut Plan) {
    let static_path = plan.static_path();
    plan.plugins.push(PluginDirective::define_static(&static_path));
}

fn overlay_production(plan: &mut Plan) {
    plan.source_maps = SourceMapMode::None;
    plan.node = NodeGlobals {
        dirname: false,
        filename: false,
    };
    plan.optimization.minimize = true;

    let static_path = plan.static_path();
    let static_out = plan.context.join(&plan.output.path).join("static");

    plan.plugins.extend([
        PluginDirective::Minify,
        PluginDirective::copy_static(static_path, static_out),
        PluginDirective::define(NODE_ENV_CONSTANT, "\"production\""),
        PluginDirective::LoaderOptions { minimize: true },
    ]);
}
