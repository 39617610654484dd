//! Hangar CLI - an aircraft characteristics catalog
//!
//! Command-line front end for the hangar-core repository layer. Every
//! repository operation is reachable from a subcommand here.

mod cli;
mod commands;
mod output;
mod resolve;

use clap::Parser;

use hangar_core::SqliteCatalog;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut catalog = SqliteCatalog::open(&cli.db)?;

    match &cli.command {
        Commands::Aircraft(command) => commands::aircraft::handle(&mut catalog, command, cli.quiet),
        Commands::Characteristic(command) => {
            commands::characteristic::handle(&mut catalog, command, cli.quiet)
        }
        Commands::Value(command) => commands::value::handle(&mut catalog, command, cli.quiet),
        Commands::Filter(args) => commands::filter::handle(&mut catalog, args, cli.quiet),
        Commands::Export(args) => commands::interchange::handle_export(&mut catalog, args, cli.quiet),
        Commands::Import(args) => commands::interchange::handle_import(&mut catalog, args, cli.quiet),
        Commands::Seed => commands::seed::handle(&mut catalog, cli.quiet),
    }
}
