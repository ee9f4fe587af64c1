// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;
use yansi::Paint;

use crate::probe::Outcome;
use crate::utils::serialize::AsSecs;

mod styles {
    use yansi::{Color, Style};

    pub static BOLD: Style = Style::new().fg(Color::White).bold();
    pub static ERR: Style = Style::new().fg(Color::Red);
}

pub trait Statistics<'a> {
    type StatsOut;

    fn statistics(&'a self) -> Self::StatsOut;
}

/// Aggregated outcomes of a run.
///
/// All values are commutative over the order outcomes are recorded in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    total: usize,
    errors: usize,
    total_latency_nanos: u128,
    min: Option<Duration>,
    max: Option<Duration>,
    error_counts: BTreeMap<String, usize>,
}

impl Report {
    pub fn new() -> Report {
        Report::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        let latency = outcome.latency();
        self.total += 1;
        self.total_latency_nanos += latency.as_nanos();
        self.min = match self.min {
            Some(min) if min <= latency => Some(min),
            _ => Some(latency),
        };
        self.max = match self.max {
            Some(max) if max >= latency => Some(max),
            _ => Some(latency),
        };

        if let Some(failure) = outcome.into_failure() {
            self.errors += 1;
            *self.error_counts.entry(failure.into_message()).or_insert(0) += 1;
        }
    }

    /// Number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of recorded outcomes with a failure.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// `None` if nothing has been recorded.
    pub fn mean(&self) -> Option<Duration> {
        if self.total == 0 {
            return None;
        }
        let mean = self.total_latency_nanos / self.total as u128;
        Some(Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX)))
    }

    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    /// Occurrences by failure message.
    pub fn error_counts(&self) -> &BTreeMap<String, usize> {
        &self.error_counts
    }

    /// Failure messages ordered by decreasing count, then by message.
    pub fn error_counts_by_frequency(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<_> = self.error_counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        counts.sort_by(|(a_msg, a_count), (b_msg, b_count)| b_count.cmp(a_count).then_with(|| a_msg.cmp(b_msg)));
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The verdict of a run: `true` if at least one lookup failed or was too slow.
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

impl Extend<Outcome> for Report {
    fn extend<T: IntoIterator<Item = Outcome>>(&mut self, iter: T) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl FromIterator<Outcome> for Report {
    fn from_iter<T: IntoIterator<Item = Outcome>>(iter: T) -> Self {
        let mut report = Report::new();
        report.extend(iter);
        report
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Report", 6)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("mean", &AsSecs(self.mean()))?;
        state.serialize_field("min", &AsSecs(self.min))?;
        state.serialize_field("max", &AsSecs(self.max))?;
        state.serialize_field("error_counts", &self.error_counts)?;
        state.end()
    }
}

/// Drains the channel until it is closed and empty.
pub async fn aggregate(mut outcomes: UnboundedReceiver<Outcome>) -> Report {
    let mut report = Report::new();
    while let Some(outcome) = outcomes.recv().await {
        report.record(outcome);
    }
    debug!("Aggregated {} outcomes with {} errors.", report.total, report.errors);

    report
}

#[derive(Debug)]
pub struct ReportStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
    pub error_kinds: usize,
}

impl fmt::Display for ReportStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_errors(errors: usize, kinds: usize) -> String {
            if errors == 0 {
                "0 Err".to_string()
            } else {
                format!("{} Err [{} kinds]", errors.paint(styles::ERR), kinds)
            }
        }

        let str = format!(
            "{num_outcomes} outcomes, {num_ok} Ok, {errs}",
            num_outcomes = self.total.paint(styles::BOLD),
            num_ok = self.ok,
            errs = fmt_errors(self.errors, self.error_kinds),
        );
        f.write_str(&str)
    }
}

impl<'a> Statistics<'a> for Report {
    type StatsOut = ReportStats;

    fn statistics(&'a self) -> Self::StatsOut {
        ReportStats {
            total: self.total,
            ok: self.total - self.errors,
            errors: self.errors,
            error_kinds: self.error_counts.len(),
        }
    }
}
