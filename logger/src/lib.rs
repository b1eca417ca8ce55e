// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A small logger for the `log` facade.
//!
//! Lines are written to stderr as `<timestamp> <LEVEL> [<label>] <message>`.
//! Records at debug and trace level carry their module target instead of the
//! label so noisy output can be traced back to where it came from.

pub use log::{debug, error, info, trace, warn};
pub use log::{Level, LevelFilter, SetLoggerError};

use log::{Log, Metadata, Record};

use std::io::Write;

/// Log at error level and terminate the process with exit status 1.
#[macro_export]
macro_rules! fatal {
    ($fmt:expr) => ({
        $crate::error!($fmt);
        ::std::process::exit(1);
    });
    ($fmt:expr, $($arg:tt)*) => ({
        $crate::error!($fmt, $($arg)*);
        ::std::process::exit(1);
    });
}

pub struct Logger {
    label: String,
    level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: env!("CARGO_PKG_NAME").to_string(),
            level: Level::Info,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Install as the global logger. Fails if a logger is already set.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(filter))
    }

    fn format(&self, record: &Record) -> String {
        let target = if record.level() >= Level::Debug {
            record.target()
        } else {
            self.label.as_str()
        };
        format!(
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            target,
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let stderr = std::io::stderr();
            let mut stderr = stderr.lock();
            let _ = writeln!(stderr, "{}", self.format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
