// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logger::*;
use stats_plot::*;

use std::path::Path;
use std::process;

fn main() {
    let config = Config::new();

    Logger::new()
        .label("stats_plot")
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    let input = match config.input() {
        Some(input) => input,
        None => {
            println!("{}", Config::usage());
            process::exit(1);
        }
    };

    debug!("{} {} reading {}", NAME, VERSION, input.display());

    let series = match SampleSeries::load(input).and_then(SampleSeries::non_empty) {
        Ok(series) => series,
        Err(PlotError::NoData) => {
            println!("{}", PlotError::NoData);
            process::exit(1);
        }
        Err(e) => fatal!("{}", e),
    };

    if let Err(e) = render_all(&series, Path::new(".")) {
        fatal!("{}", e);
    }
}
