mod cli;
mod commands;

use std::process;

use anyhow::Result;
use clap::Parser;
use markdown_blocks_config::Config;

use crate::cli::Cli;

fn level_from_verbosity(verbose: u8) -> Option<log::LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn init_logging(verbose: u8, config: &Config) {
    let mut builder = env_logger::Builder::from_default_env();
    // RUST_LOG wins over flags and config
    if std::env::var_os("RUST_LOG").is_none() {
        let level = level_from_verbosity(verbose)
            .or_else(|| config.log_level.as_deref().and_then(|l| l.parse().ok()))
            .unwrap_or(log::LevelFilter::Warn);
        builder.filter_level(level);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    init_logging(cli.verbose, &config);
    log::debug!("running {:?}", cli.command);

    let pretty = config.pretty && !cli.compact;
    let value = commands::execute(cli.command, &config)?;
    println!("{}", commands::render(&value, pretty)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_from_verbosity(0), None);
        assert_eq!(level_from_verbosity(1), Some(log::LevelFilter::Info));
        assert_eq!(level_from_verbosity(2), Some(log::LevelFilter::Debug));
        assert_eq!(level_from_verbosity(7), Some(log::LevelFilter::Trace));
    }
}
