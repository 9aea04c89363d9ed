use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, debug, info};
use sp_field_mapper::config::Config;

mod cli;

use cli::{Cli, Commands};
use cli::commands::convert::{to_local_command, to_remote_command};
use cli::commands::inspect::inspect_command;
use cli::commands::schema::schema_command;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over -v
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    info!("Starting sp-field-mapper");

    let config = Config::load()?;
    debug!("Output format: {:?}", config.settings.output_format);

    if cli.no_color || !config.settings.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Inspect(args) => inspect_command(&config, args),
        Commands::ToLocal(args) => to_local_command(&config, args),
        Commands::ToRemote(args) => to_remote_command(&config, args),
        Commands::Schema(args) => schema_command(config, args),
    }
}
