//! Theme command handler
//!
//! The theme preference lives in config `display.theme`; changes are saved
//! immediately so the next rendered dashboard picks them up.

use crate::args::ThemeSubcommand;
use study_dashboard::config::Config;
use study_dashboard::core::theme::Theme;

/// Dispatch theme subcommands
///
/// `config` is the stored configuration, without CLI overrides.
pub fn run(subcommand: Option<ThemeSubcommand>, config: &mut Config) {
    match subcommand {
        None | Some(ThemeSubcommand::Get) => println!("{}", config.theme()),
        Some(ThemeSubcommand::Toggle) => {
            let theme = config.theme().toggled();
            store(config, theme);
        }
        Some(ThemeSubcommand::Set { theme }) => store(config, theme.into()),
    }
}

fn store(config: &mut Config, theme: Theme) {
    config.display.theme = theme.to_string();
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
    println!("✓ Theme set to {theme}");
}
