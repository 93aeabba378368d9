//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use study_dashboard::config::Config;

/// Dispatch config subcommands
///
/// `config` is the stored configuration, without CLI overrides.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole config with its file location
pub fn handle_config_get(config: &Config, key: Option<String>) {
    match key {
        Some(k) => match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===");
            println!("# {}\n", Config::get_config_file_path().display());
            print!("{config}");
        }
    }
}

/// Validate, store and save a single value
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Set {key} = {value}");
}

/// Restore a single value from the compiled-in defaults
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    println!("✓ Reset {key} to default");
}

/// Delete the config file after confirmation
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset studydash config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if !is_confirmation(&response) {
        println!("✗ Reset cancelled");
        return;
    }
    if let Err(e) = Config::reset() {
        eprintln!("Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

fn is_confirmation(response: &str) -> bool {
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confirmation() {
        assert!(is_confirmation("y\n"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation(""));
    }
}
