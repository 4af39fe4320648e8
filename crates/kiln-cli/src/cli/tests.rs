#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, OutputFormat};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_check_with_sources() {
        let cli = Cli::parse_from([
            "kiln",
            "check",
            "--root",
            "app",
            "--profile",
            "production",
            "--no-env",
        ]);

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.source.root, Some(PathBuf::from("app")));
                assert_eq!(args.source.profile.as_deref(), Some("production"));
                assert!(args.source.no_env);
                assert!(args.source.config.is_none());
                assert!(!args.schema_only);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_defaults_to_json() {
        let cli = Cli::parse_from(["kiln", "show"]);
        match cli.command {
            Command::Show(args) => assert_eq!(args.output, OutputFormat::Json),
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_toml() {
        let cli = Cli::parse_from(["kiln", "show", "-o", "toml", "-c", "kiln.toml"]);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.output, OutputFormat::Toml);
                assert_eq!(args.source.config, Some(PathBuf::from("kiln.toml")));
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["kiln", "init", "--dir", "web", "--force"]);
        match cli.command {
            Command::Init(args) => {
                assert_eq!(args.dir, PathBuf::from("web"));
                assert!(args.force);
            }
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["kiln", "plugins", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["kiln", "-v", "-q", "plugins"]).is_err());
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        assert!(Cli::try_parse_from(["kiln", "show", "--output", "yaml"]).is_err());
    }
}
