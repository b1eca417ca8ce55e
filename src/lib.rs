// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Turn a stats CSV (`ts`, `p95_ms`, `rss_mib`) into two line charts:
//! `p95.png` and `rss.png`.

pub mod charts;
mod config;
mod error;
mod samples;

pub use crate::charts::{render_all, ChartSpec, CHARTS, P95_CHART, RSS_CHART};
pub use crate::config::{Config, NAME, VERSION};
pub use crate::error::PlotError;
pub use crate::samples::{Columns, Sample, SampleSeries};
