// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::time::Duration;

use yansi::Painted;

use crate::app::styles;
use crate::app::AppConfig;
use crate::resolver::ResolverKind;
use crate::slap::SlapConfig;
use crate::statistics::Statistics;

#[derive(Debug, Default)]
pub struct ConsoleOpts {
    quiet: bool,
}

impl From<&AppConfig> for ConsoleOpts {
    fn from(app_config: &AppConfig) -> Self {
        ConsoleOpts {
            quiet: app_config.quiet,
        }
    }
}

/// Progress and status messages around the report.
///
/// Everything but errors is suppressed in quiet mode.
#[derive(Debug)]
pub struct Console {
    opts: ConsoleOpts,
}

impl Console {
    pub fn new(opts: ConsoleOpts) -> Console {
        Console { opts }
    }

    pub fn print_slap_opts(&self, config: &SlapConfig, resolver: ResolverKind) {
        if self.not_quiet() {
            let threshold = config
                .threshold()
                .map(|x| humantime::format_duration(x).to_string())
                .unwrap_or_else(|| "none".to_string());
            self.caption(format!(
                "{}: host={}, resolver={}, workers={}, lookups per worker={}, threshold={}",
                Fmt::emph("Options"),
                config.host(),
                resolver,
                config.workers(),
                config.iterations(),
                threshold,
            ));
            if config.threshold() == Some(Duration::ZERO) {
                self.attention("Threshold of 0s counts every successful lookup as an error.");
            }
        }
    }

    pub fn print_start(&self, config: &SlapConfig) {
        if self.not_quiet() {
            self.info(format!(
                "Starting {} workers with {} lookups each ...",
                config.workers(),
                config.iterations()
            ));
        }
    }

    pub fn print_workers_finished(&self) {
        if self.not_quiet() {
            self.info("Workers finished, calculating results");
        }
    }

    pub fn print_statistics<'a, T: Statistics<'a>>(&self, data: &'a T, total_run_time: Duration)
    where
        <T as Statistics<'a>>::StatsOut: fmt::Display,
    {
        if self.not_quiet() {
            let statistics = data.statistics();
            self.info(format!(
                "Received {} within {} ms of total run time.",
                statistics,
                total_run_time.as_millis()
            ));
        }
    }

    pub fn print_verdict(&self, errors_found: bool) {
        if self.not_quiet() {
            if errors_found {
                self.failed("Lookups failed.");
            } else {
                self.ok("No errors occurred.");
            }
        }
    }

    pub fn print_finished(&self) {
        if self.not_quiet() {
            self.finished();
        }
    }

    pub fn emphasize<T: fmt::Display>(&self, item: T) {
        println!("{}", Fmt::emph(item))
    }

    pub fn info<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", styles::info_prefix(), str.as_ref());
    }

    pub fn attention<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::attention(styles::attention_prefix()), str.as_ref());
    }

    pub fn finished(&self) {
        self.emphasize(format!("{} Finished.", styles::finished_prefix()));
    }

    pub fn caption<T: AsRef<str>>(&self, str: T) {
        self.emphasize(format!("{} {}", styles::caption_prefix(), str.as_ref()));
    }

    pub fn failed<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::error(styles::error_prefix()), str.as_ref());
    }

    pub fn error<T: AsRef<str>>(&self, str: T) {
        eprintln!("{} {}", Fmt::error(styles::error_prefix()), str.as_ref());
    }

    pub fn ok<T: AsRef<str>>(&self, str: T) {
        println!("{} {}", Fmt::ok(styles::ok_prefix()), str.as_ref());
    }

    pub fn not_quiet(&self) -> bool {
        !self.opts.quiet
    }
}

pub struct Fmt {}

impl Fmt {
    pub fn emph<T: fmt::Display>(item: T) -> Painted<T> {
        Painted {
            value: item,
            style: styles::EMPH,
        }
    }

    pub fn attention<T: fmt::Display>(item: T) -> Painted<T> {
        Painted {
            value: item,
            style: styles::ATTENTION,
        }
    }

    pub fn error<T: fmt::Display>(item: T) -> Painted<T> {
        Painted {
            value: item,
            style: styles::ERROR,
        }
    }

    pub fn ok<T: fmt::Display>(item: T) -> Painted<T> {
        Painted {
            value: item,
            style: styles::OK,
        }
    }
}
