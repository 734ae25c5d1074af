mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Command};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate { slug, seed, amount } => commands::generate::run(&slug, seed, amount),
        Command::Count { slug } => commands::count::run(&slug),
        Command::Categories { pos } => commands::categories::run(pos.as_deref()),
        Command::Stats { json } => commands::stats::run(json),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
