use clap::CommandFactory;
use clap::Parser;
use color_eyre::Result;
use config::Config;
use directory::StubDirectory;
use global_utils::print_dbg;
use human_panic::setup_panic;

use crate::cli::{Args, Commands};

mod cli;
mod subcommands;
mod telemetry;

fn print_help() -> Result<()> {
    let mut cmd = Args::command();
    cmd.print_help()?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init()?;

    setup_panic!();

    #[cfg(debug_assertions)]
    color_eyre::install()?;

    let args = Args::parse();

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.debug {
        std::env::set_var(global_utils::DEBUG_ENV, args.debug.to_string());
    }

    let Some(command) = args.command else {
        return print_help();
    };

    let config = Config::read(args.config.as_deref()).await?;
    print_dbg!(&config);

    tracing::debug!(%command, "running command");

    match command {
        Commands::Role { identity, json } => subcommands::role(identity, json)?,
        Commands::Users { json, delay_ms } => {
            let config = match delay_ms {
                Some(delay_ms) => Config { delay_ms },
                None => config,
            };

            subcommands::users(&StubDirectory::from_config(&config), json).await?
        }
    }

    Ok(())
}
