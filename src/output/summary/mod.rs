// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::HashSet;
use std::time::Duration;

use super::*;

pub mod report;

#[derive(Debug, Default)]
pub struct SummaryOptions {
    /// Show latencies in human readable form instead of fractional seconds
    human: bool,
}

impl SummaryOptions {
    pub fn new(human: bool) -> SummaryOptions {
        SummaryOptions { human }
    }

    pub fn human(&self) -> bool {
        self.human
    }
}

impl<'a> TryFrom<Vec<&'a str>> for SummaryOptions {
    type Error = Error;

    fn try_from(values: Vec<&'a str>) -> std::result::Result<Self, Self::Error> {
        let options: HashSet<&str> = values.into_iter().collect();
        Ok(SummaryOptions {
            human: options.contains("human"),
        })
    }
}

#[derive(Debug, Default)]
pub struct SummaryFormat {
    opts: SummaryOptions,
}

impl SummaryFormat {
    pub fn new(opts: SummaryOptions) -> SummaryFormat {
        SummaryFormat { opts }
    }
}

pub trait SummaryFormatter {
    fn output<W: Write>(&self, writer: &mut W, opts: &SummaryOptions) -> Result<()>;
}

impl<T: SummaryFormatter> OutputFormat<T> for SummaryFormat {
    fn output<W: Write>(&self, writer: &mut W, data: &T) -> Result<()> {
        data.output(writer, &self.opts)
    }
}

trait Rendering {
    fn render(&self, opts: &SummaryOptions) -> String;
}

impl Rendering for Duration {
    fn render(&self, opts: &SummaryOptions) -> String {
        if opts.human() {
            humantime::format_duration(*self).to_string()
        } else {
            format!("{:.6} seconds", self.as_secs_f64())
        }
    }
}
