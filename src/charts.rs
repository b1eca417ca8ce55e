// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The two fixed charts drawn from a `SampleSeries`.

use crate::{PlotError, SampleSeries};

use logger::*;
use timegraph::PlotConfig;

use std::path::{Path, PathBuf};

pub const TIME_DESC: &str = "Time (s)";

/// Width and height of every chart, in pixels.
pub const SIZE: (u32, u32) = (640, 480);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Metric {
    P95,
    Rss,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub file: &'static str,
    pub caption: &'static str,
    pub y_desc: &'static str,
    pub metric: Metric,
}

pub const P95_CHART: ChartSpec = ChartSpec {
    file: "p95.png",
    caption: "P95 over time",
    y_desc: "P95 latency (ms)",
    metric: Metric::P95,
};

pub const RSS_CHART: ChartSpec = ChartSpec {
    file: "rss.png",
    caption: "RSS over time",
    y_desc: "RSS (MiB)",
    metric: Metric::Rss,
};

pub const CHARTS: [ChartSpec; 2] = [P95_CHART, RSS_CHART];

impl ChartSpec {
    /// The y values this chart plots against the timestamps.
    pub fn values<'a>(&self, series: &'a SampleSeries) -> &'a [f64] {
        match self.metric {
            Metric::P95 => series.p95_values(),
            Metric::Rss => series.rss_values(),
        }
    }

    /// Render into `dir`, overwriting any previous image of the same name.
    pub fn render(&self, series: &SampleSeries, dir: &Path) -> Result<PathBuf, PlotError> {
        let path = dir.join(self.file);

        PlotConfig::new(series.timestamps(), self.values(series))
            .caption(self.caption)
            .x_desc(TIME_DESC)
            .y_desc(self.y_desc)
            .size(SIZE)
            .plot_line(&path)
            .map_err(|e| PlotError::Render {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        info!("wrote {}", path.display());

        Ok(path)
    }
}

/// Render every chart into `dir` and return the written paths.
pub fn render_all(series: &SampleSeries, dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    CHARTS.iter().map(|chart| chart.render(series, dir)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sample;

    fn series() -> SampleSeries {
        let mut series = SampleSeries::new();
        for (ts, p95_ms, rss_mib) in &[(0.0, 12.5, 100.0), (1.0, 13.0, 101.2), (2.0, 11.0, 99.5)] {
            series.push(Sample {
                ts: *ts,
                p95_ms: *p95_ms,
                rss_mib: *rss_mib,
            });
        }
        series
    }

    #[test]
    fn charts_pick_their_column() {
        let series = series();
        assert_eq!(P95_CHART.values(&series), &[12.5, 13.0, 11.0]);
        assert_eq!(RSS_CHART.values(&series), &[100.0, 101.2, 99.5]);
    }

    #[test]
    fn fixed_labels() {
        assert_eq!(P95_CHART.file, "p95.png");
        assert_eq!(P95_CHART.caption, "P95 over time");
        assert_eq!(P95_CHART.y_desc, "P95 latency (ms)");
        assert_eq!(RSS_CHART.file, "rss.png");
        assert_eq!(RSS_CHART.caption, "RSS over time");
        assert_eq!(RSS_CHART.y_desc, "RSS (MiB)");
        assert_eq!(TIME_DESC, "Time (s)");
    }

    #[test]
    fn renders_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = render_all(&series(), dir.path()).unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("p95.png"), dir.path().join("rss.png")]
        );
        for path in written {
            let bytes = std::fs::read(&path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG"), "{} is not a png", path.display());
        }
    }

    #[test]
    fn render_order_does_not_matter() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let series = series();

        P95_CHART.render(&series, first.path()).unwrap();
        RSS_CHART.render(&series, first.path()).unwrap();
        RSS_CHART.render(&series, second.path()).unwrap();
        P95_CHART.render(&series, second.path()).unwrap();

        for file in &["p95.png", "rss.png"] {
            let a = std::fs::read(first.path().join(file)).unwrap();
            let b = std::fs::read(second.path().join(file)).unwrap();
            assert_eq!(a, b, "{} differs with render order", file);
        }
    }

    #[test]
    fn unwritable_target_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        match P95_CHART.render(&series(), &missing) {
            Err(PlotError::Render { file, .. }) => assert!(file.ends_with("p95.png")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
