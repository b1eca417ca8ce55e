// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prints the lines a `stats-plot` run would log. Info and above are tagged
//! with the label; debug and trace carry the module they came from.
//!
//! `cargo run --example demo -- debug`

use logger::*;

mod samples {
    use logger::*;

    pub fn load(path: &str) -> usize {
        trace!("opening {}", path);
        debug!("parsed {} samples from {}", 3, path);
        3
    }
}

mod charts {
    use logger::*;

    pub fn render(file: &str) {
        info!("wrote {}", file);
    }
}

fn main() {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(Level::Trace);

    Logger::new()
        .label("stats_plot")
        .level(level)
        .init()
        .expect("Failed to initialize logger");

    if samples::load("stats.csv") == 0 {
        warn!("nothing to plot");
        return;
    }

    for file in &["p95.png", "rss.png"] {
        charts::render(file);
    }

    error!("{}: {}", "absent.csv", "No such file or directory (os error 2)");
}
