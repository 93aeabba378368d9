//! Command-line interface entry point for `studydash`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use study_dashboard::config::Config;
use study_dashboard::info;
use study_dashboard::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // `stored` mirrors the config file; overrides only reach `config`
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI --log-file wins over config logging.file
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Show { week_index } => commands::show::run(&config, week_index),
        Command::Report {
            output,
            format,
            week_index,
        } => commands::report::run(output.as_deref(), &format, week_index, &config),
        Command::Countdown { watch, ticks } => commands::countdown::run(&config, watch, ticks),
        Command::Quote => commands::quote::run(&config),
        Command::Theme { subcommand } => commands::theme::run(subcommand, &mut stored),
        Command::Open {
            subject,
            chapter,
            kind,
        } => commands::open::run(&config, &subject, &chapter, kind.into()),
    }
}
