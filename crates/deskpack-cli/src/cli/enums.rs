use clap::ValueEnum;
use deskpack_plan::Environment;

/// Build environment selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum EnvArg {
    /// Source maps, hot reload, static files served in place
    #[value(name = "development", alias = "dev")]
    Development,

    /// Minified output, static files copied next to the bundle
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<EnvArg> for Environment {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Development => Environment::Development,
            EnvArg::Production => Environment::Production,
        }
    }
}
