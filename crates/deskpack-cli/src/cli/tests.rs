#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, EnvArg};
    use clap::Parser;
    use deskpack_plan::Environment;
    use std::path::PathBuf;

    #[test]
    fn test_plan_defaults() {
        let cli = Cli::try_parse_from(["deskpack", "plan"]).unwrap();
        match cli.command {
            Command::Plan(args) => {
                assert!(args.env.is_none());
                assert!(args.root.is_none());
                assert!(args.out.is_none());
            }
            _ => panic!("Expected plan command"),
        }
    }

    #[test]
    fn test_plan_with_env_alias() {
        let cli = Cli::try_parse_from(["deskpack", "plan", "--env", "prod", "--out", "plan.json"])
            .unwrap();
        match cli.command {
            Command::Plan(args) => {
                assert_eq!(args.env, Some(EnvArg::Production));
                assert_eq!(args.out, Some(PathBuf::from("plan.json")));
            }
            _ => panic!("Expected plan command"),
        }
    }

    #[test]
    fn test_unknown_env_is_rejected() {
        assert!(Cli::try_parse_from(["deskpack", "plan", "--env", "staging"]).is_err());
    }

    #[test]
    fn test_resolve_requires_file() {
        assert!(Cli::try_parse_from(["deskpack", "resolve"]).is_err());

        let cli = Cli::try_parse_from(["deskpack", "resolve", "src/App.jsx", "--strict"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.file, PathBuf::from("src/App.jsx"));
                assert!(args.strict);
            }
            _ => panic!("Expected resolve command"),
        }
    }

    #[test]
    fn test_check_accepts_env() {
        let cli = Cli::try_parse_from(["deskpack", "check", "-e", "production"]).unwrap();
        match cli.command {
            Command::Check(args) => assert_eq!(args.env, Some(EnvArg::Production)),
            _ => panic!("Expected check command"),
        }

        let cli = Cli::try_parse_from(["deskpack", "check"]).unwrap();
        match cli.command {
            Command::Check(args) => assert!(args.env.is_none()),
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["deskpack", "check", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["deskpack", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_env_arg_converts() {
        assert_eq!(Environment::from(EnvArg::Development), Environment::Development);
        assert_eq!(Environment::from(EnvArg::Production), Environment::Production);
    }
}
