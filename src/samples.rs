// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Best-effort reader for stats CSV files.
//!
//! A row contributes a sample only when its `ts`, `p95_ms` and `rss_mib`
//! fields are all present and numeric. Anything else is skipped without a
//! trace; only I/O failures are reported.

use crate::PlotError;

use csv::{ReaderBuilder, StringRecord};
use logger::*;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const TS: &str = "ts";
pub const P95_MS: &str = "p95_ms";
pub const RSS_MIB: &str = "rss_mib";

/// One fully parsed row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub ts: f64,
    pub p95_ms: f64,
    pub rss_mib: f64,
}

impl Sample {
    /// Extract all three fields from `record`, or nothing at all.
    pub fn from_record(record: &StringRecord, columns: &Columns) -> Option<Self> {
        Some(Self {
            ts: field(record, columns.ts)?,
            p95_ms: field(record, columns.p95_ms)?,
            rss_mib: field(record, columns.rss_mib)?,
        })
    }
}

fn field(record: &StringRecord, index: Option<usize>) -> Option<f64> {
    parse_float(record.get(index?)?)
}

/// `str::parse::<f64>` on the trimmed text, also taking single underscores
/// between digits as separators (`1_000.5`).
fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if !text.contains('_') {
        return text.parse().ok();
    }

    let bytes = text.as_bytes();
    let digit_at = |i: usize| bytes.get(i).map_or(false, u8::is_ascii_digit);
    let separators_ok = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'_')
        .all(|(i, _)| i > 0 && digit_at(i - 1) && digit_at(i + 1));

    if !separators_ok {
        return None;
    }

    text.replace('_', "").parse().ok()
}

/// Positions of the required columns, resolved from the header row. When a
/// name repeats, the last column with that name wins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns {
    ts: Option<usize>,
    p95_ms: Option<usize>,
    rss_mib: Option<usize>,
}

impl Columns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let headers: Vec<&str> = headers.iter().collect();
        let position = |name: &str| headers.iter().rposition(|header| *header == name);
        Self {
            ts: position(TS),
            p95_ms: position(P95_MS),
            rss_mib: position(RSS_MIB),
        }
    }
}

/// Row-aligned samples in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSeries {
    timestamps: Vec<f64>,
    p95_values: Vec<f64>,
    rss_values: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and parse the CSV file at `path`. The file is closed before this
    /// returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlotError> {
        let path = path.as_ref();
        let io_error = |source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let series = Self::from_reader(file).map_err(io_error)?;

        debug!("parsed {} samples from {}", series.len(), path.display());

        Ok(series)
    }

    /// Parse a header-delimited CSV stream.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut series = Self::new();

        let columns = match reader.headers() {
            Ok(headers) => Columns::from_headers(headers),
            Err(e) => match e.into_kind() {
                csv::ErrorKind::Io(e) => return Err(e),
                _ => return Ok(series),
            },
        };

        let mut record = StringRecord::new();
        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {
                    if let Some(sample) = Sample::from_record(&record, &columns) {
                        series.push(sample);
                    }
                }
                Ok(false) => break,
                Err(e) => {
                    if let csv::ErrorKind::Io(e) = e.into_kind() {
                        return Err(e);
                    }
                }
            }
        }

        Ok(series)
    }

    /// Append one sample to all three sequences.
    pub fn push(&mut self, sample: Sample) {
        self.timestamps.push(sample.ts);
        self.p95_values.push(sample.p95_ms);
        self.rss_values.push(sample.rss_mib);
    }

    /// Fail with `PlotError::NoData` when no row was usable.
    pub fn non_empty(self) -> Result<Self, PlotError> {
        if self.is_empty() {
            Err(PlotError::NoData)
        } else {
            Ok(self)
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn p95_values(&self) -> &[f64] {
        &self.p95_values
    }

    pub fn rss_values(&self) -> &[f64] {
        &self.rss_values
    }
}
