// src/bin/cli.rs
use clap::Parser;
use gibraltar_tariff::{ cli::Cli, log, runner };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    log::init(cli.log_level());

    runner::run(&cli.options())?;
    Ok(())
}
