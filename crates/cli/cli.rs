use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "roster", about = "Look up user roles and list the user directory")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file, defaults to `./roster.json`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'V')]
    pub version: bool,
}

#[derive(Subcommand, strum::Display, Debug, Clone)]
pub enum Commands {
    /// Print the role of an identity
    Role {
        identity: String,

        #[arg(long)]
        json: bool,
    },
    /// List every identity in the directory
    Users {
        #[arg(long)]
        json: bool,

        /// Overrides the configured directory latency
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{Args, Commands};

    #[test]
    fn parse_role() {
        let args = Args::try_parse_from(["roster", "role", "Packy", "--json"]).unwrap();

        match args.command {
            Some(Commands::Role { identity, json }) => {
                assert_eq!(identity, "Packy");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_users_with_global_flags() {
        let args = Args::try_parse_from([
            "roster",
            "users",
            "--delay-ms",
            "10",
            "--config",
            "custom.json",
            "--debug",
        ])
        .unwrap();

        assert!(args.debug);
        assert_eq!(args.config.unwrap().to_str(), Some("custom.json"));
        assert!(matches!(
            args.command,
            Some(Commands::Users {
                json: false,
                delay_ms: Some(10)
            })
        ));
    }

    #[test]
    fn role_requires_identity() {
        assert!(Args::try_parse_from(["roster", "role"]).is_err());
    }

    #[test]
    fn command_is_optional() {
        let args = Args::try_parse_from(["roster"]).unwrap();

        assert!(args.command.is_none());
    }
}
