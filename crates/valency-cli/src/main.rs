mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::ConfigOverrides;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("Valency CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let mut overrides = ConfigOverrides {
        config_path: cli.config.clone(),
        elements_path: cli.elements.clone(),
        ..Default::default()
    };
    if let Commands::Oxidation(args) = &cli.command {
        overrides.strategy = args.strategy.map(Into::into);
        overrides.search_upper_bound = args.search_upper_bound;
        overrides.search_lower_bound = args.search_lower_bound;
    }
    let app_config = config::build_config(&overrides)?;
    debug!("Resolved configuration: {:?}", &app_config);

    let mut stdout = std::io::stdout().lock();
    let command_result = match &cli.command {
        Commands::Shells(args) => {
            info!("Dispatching to 'shells' command.");
            commands::shells::run(args, &app_config, &mut stdout)
        }
        Commands::Oxidation(args) => {
            info!("Dispatching to 'oxidation' command.");
            commands::oxidation::run(args, &app_config, &mut stdout)
        }
        Commands::Elements(args) => {
            info!("Dispatching to 'elements' command.");
            commands::elements::run(args, &app_config, &mut stdout)
        }
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }
    command_result
}
