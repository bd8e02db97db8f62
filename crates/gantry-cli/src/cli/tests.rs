#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_environment;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parse_environment_accepts_valid_names() {
        assert_eq!(parse_environment("dev"), Ok("dev".to_string()));
        assert_eq!(parse_environment("prod"), Ok("prod".to_string()));
        assert_eq!(parse_environment("staging"), Ok("staging".to_string()));
        assert_eq!(parse_environment("qa-2"), Ok("qa-2".to_string()));
        assert_eq!(parse_environment("feature_x"), Ok("feature_x".to_string()));
    }

    #[test]
    fn parse_environment_rejects_invalid_names() {
        assert!(parse_environment("").is_err());
        assert!(parse_environment("  ").is_err());
        assert!(parse_environment("pro d").is_err());
        assert!(parse_environment("prod/1").is_err());
        assert!(parse_environment("prod.1").is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["gantry", "--verbose", "--quiet", "assemble"]);
        assert!(result.is_err());
    }

    #[test]
    fn assemble_args_defaults() {
        let args = Cli::try_parse_from(["gantry", "assemble"]).unwrap();

        if let Command::Assemble(assemble) = args.command {
            assert_eq!(assemble.env, None);
            assert_eq!(assemble.manifest, None);
            assert_eq!(assemble.out, None);
            assert!(!assemble.pretty);
            assert_eq!(assemble.workers, None);
            assert!(!assemble.dry_run_clean);
        } else {
            panic!("Expected Assemble command");
        }
    }

    #[test]
    fn assemble_rejects_malformed_environment() {
        let result = Cli::try_parse_from(["gantry", "assemble", "--env", "pro d"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_args_parse() {
        let args = Cli::try_parse_from([
            "gantry", "check", "--env", "prod", "--paths", "--warnings",
        ])
        .unwrap();

        if let Command::Check(check) = args.command {
            assert_eq!(check.env.as_deref(), Some("prod"));
            assert!(check.paths);
            assert!(check.warnings);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn explain_requires_a_path() {
        let result = Cli::try_parse_from(["gantry", "explain"]);
        assert!(result.is_err());

        let args = Cli::try_parse_from(["gantry", "explain", "src/main.ts"]).unwrap();
        if let Command::Explain(explain) = args.command {
            assert_eq!(explain.path, "src/main.ts");
        } else {
            panic!("Expected Explain command");
        }
    }

    #[test]
    fn init_defaults_to_current_directory() {
        let args = Cli::try_parse_from(["gantry", "init"]).unwrap();

        if let Command::Init(init) = args.command {
            assert_eq!(init.dir, PathBuf::from("."));
            assert!(!init.force);
        } else {
            panic!("Expected Init command");
        }
    }
}
