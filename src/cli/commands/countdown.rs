//! Countdown command handler

use crate::commands::exam_date;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use study_dashboard::config::Config;
use study_dashboard::core::countdown::{remaining, Clock};
use study_dashboard::debug;

const TICK: Duration = Duration::from_secs(1);

/// Print the time left; with `watch`, reprint every second.
///
/// Watching stops after `ticks` updates, or once the exam has started.
pub fn run(config: &Config, watch: bool, ticks: Option<u64>) {
    let target = exam_date(config);
    let clock = Clock::System;
    let label = if config.exam.label.is_empty() {
        "Exam"
    } else {
        config.exam.label.as_str()
    };

    if !watch {
        println!("{label}: {}", remaining(target, clock.now()));
        return;
    }

    let mut printed = 0u64;
    loop {
        let left = remaining(target, clock.now());
        print!("\r{label}: {left}");
        io::stdout().flush().ok();
        printed += 1;

        if left.is_elapsed() || ticks.is_some_and(|limit| printed >= limit) {
            break;
        }
        thread::sleep(TICK);
    }
    println!();
    debug!("Countdown stopped after {printed} updates");
}
