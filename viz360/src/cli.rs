use clap::{Parser, Subcommand};

/// viz360 - manage panoramic viewer environments
#[derive(Parser, Debug)]
#[command(name = "viz360")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Public asset directory holding environments.json, img/ and presets/
    /// (default: $VIZ360_PUBLIC_DIR or ./public)
    #[arg(long, global = true, value_name = "DIR")]
    pub public_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register an environment: create its folders, write a default preset
    /// from the images found and add it to environments.json
    Add {
        /// Environment name; multiple words are joined with spaces
        #[arg(value_name = "NAME", required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Remove an environment from environments.json (folders are kept)
    Remove {
        /// Environment name; multiple words are joined with spaces
        #[arg(value_name = "NAME", required = true, num_args = 1..)]
        name: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List registered environments and check their folders and presets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write img/<id>/manifest.json image lists (all environments when no name is given)
    Manifest {
        /// Environment name; multiple words are joined with spaces
        #[arg(value_name = "NAME", num_args = 0..)]
        name: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["viz360", "add", "Sala", "2"]).unwrap();
        match cli.command {
            Commands::Add { name } => assert_eq!(name, vec!["Sala", "2"]),
            other => panic!("unexpected {other:?}"),
        }
        assert!(cli.public_dir.is_none());
    }

    #[test]
    fn test_global_public_dir_after_subcommand() {
        let cli =
            Cli::try_parse_from(["viz360", "remove", "Sala", "--force", "--public-dir", "/srv/p"])
                .unwrap();
        assert_eq!(cli.public_dir.as_deref(), Some("/srv/p"));
        match cli.command {
            Commands::Remove { name, force } => {
                assert_eq!(name, vec!["Sala"]);
                assert!(force);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_usage_errors() {
        let no_args = Cli::try_parse_from(["viz360"]).unwrap_err();
        assert_eq!(
            no_args.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        assert_ne!(no_args.exit_code(), 0);

        let unknown = Cli::try_parse_from(["viz360", "rename"]).unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::InvalidSubcommand);

        for cmd in ["add", "remove"] {
            let missing = Cli::try_parse_from(["viz360", cmd]).unwrap_err();
            assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);
            assert_ne!(missing.exit_code(), 0);
        }
    }

    #[test]
    fn test_list_and_manifest() {
        let cli = Cli::try_parse_from(["viz360", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));
        let cli = Cli::try_parse_from(["viz360", "manifest"]).unwrap();
        assert!(matches!(cli.command, Commands::Manifest { ref name } if name.is_empty()));
    }
}
