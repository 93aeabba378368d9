//! Quote command handler

use crate::commands::data_source;
use study_dashboard::config::Config;
use study_dashboard::core::loader::DataSource;
use study_dashboard::core::models::Quote;
use study_dashboard::core::quotes::pick_or_fallback;
use study_dashboard::error;

/// Print one random quote, or the fallback quote if none can be loaded
pub fn run(config: &Config) {
    let quote = match data_source(config).quotes() {
        Ok(quotes) => pick_or_fallback(&quotes),
        Err(e) => {
            error!("Error loading quotes: {e}");
            Quote::fallback()
        }
    };
    println!("\"{}\"\n  - {}", quote.text, quote.author);
}
