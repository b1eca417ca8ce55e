// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{App, AppSettings, Arg, ArgMatches};
use logger::Level;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    input: Option<PathBuf>,
    logging: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            logging: Level::Info,
        }
    }
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Self {
        Self::from_matches(&app().get_matches())
    }

    /// parse an explicit argument list, the first item being the program name
    pub fn from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        app()
            .get_matches_from_safe(args)
            .map(|matches| Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let mut config = Self::default();

        config.input = matches.value_of_os("csv").map(PathBuf::from);

        config
    }

    /// path of the stats CSV, if one was given
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// get logging level
    pub fn logging(&self) -> Level {
        self.logging
    }

    pub fn usage() -> String {
        format!("Usage: {} <stats.csv>", NAME)
    }
}

// The only argument is the path. Anything that looks like a flag, including
// `--help` and `--version`, is taken as a file name.
fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .author("Brian Martin <bmartin@twitter.com>")
        .about("Render latency and memory charts from a stats CSV")
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("csv")
                .value_name("FILE")
                .help("CSV with ts, p95_ms and rss_mib columns")
                .allow_hyphen_values(true)
                .index(1),
        )
}
