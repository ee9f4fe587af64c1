// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::resolver::{self, Resolve};

/// Classification of an unsuccessful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The resolution itself failed; carries the resolver's error text.
    ResolutionError(String),
    /// The resolution succeeded, but took longer than the threshold.
    ThresholdExceeded(String),
}

impl Failure {
    pub fn threshold_exceeded(threshold: Duration) -> Failure {
        Failure::ThresholdExceeded(format!(
            "lookup exceeded threshold of {}",
            humantime::format_duration(threshold)
        ))
    }

    /// The text failures are grouped by.
    pub fn message(&self) -> &str {
        match self {
            Failure::ResolutionError(msg) | Failure::ThresholdExceeded(msg) => msg,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Failure::ResolutionError(msg) | Failure::ThresholdExceeded(msg) => msg,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Latency and classification of exactly one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    latency: Duration,
    failure: Option<Failure>,
}

impl Outcome {
    pub fn new(latency: Duration, failure: Option<Failure>) -> Outcome {
        Outcome { latency, failure }
    }

    /// Classifies a finished lookup.
    ///
    /// A failed lookup is a `ResolutionError` regardless of its latency. A successful lookup is
    /// `ThresholdExceeded` only if its latency is strictly greater than `threshold`.
    pub fn classify<T>(
        latency: Duration,
        result: resolver::ResolverResult<T>,
        threshold: Option<Duration>,
    ) -> Outcome {
        let failure = match (result, threshold) {
            (Err(err), _) => Some(Failure::ResolutionError(err.to_string())),
            (Ok(_), Some(threshold)) if latency > threshold => Some(Failure::threshold_exceeded(threshold)),
            (Ok(_), _) => None,
        };
        Outcome { latency, failure }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn into_failure(self) -> Option<Failure> {
        self.failure
    }
}

/// Times and classifies single lookups of one host.
#[derive(Clone)]
pub struct Probe {
    resolver: Arc<dyn Resolve>,
    host: Arc<str>,
    threshold: Option<Duration>,
}

impl Probe {
    pub fn new<T: Into<Arc<str>>>(resolver: Arc<dyn Resolve>, host: T, threshold: Option<Duration>) -> Probe {
        Probe {
            resolver,
            host: host.into(),
            threshold,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Runs exactly one blocking lookup.
    pub fn run(&self) -> Outcome {
        let start_time = Instant::now();
        let result: resolver::ResolverResult<Vec<IpAddr>> = self.resolver.lookup(&self.host);
        let latency = start_time.elapsed();
        trace!("Lookup of {} took {:?}; success={}", self.host, latency, result.is_ok());

        Outcome::classify(latency, result, self.threshold)
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("host", &self.host)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;
    use crate::utils::tests::resolver::{ScriptedResolver, Step};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn success_within_threshold() {
        let outcome = Outcome::classify(ms(10), Ok(()), Some(ms(500)));

        assert_that(&outcome.failure()).is_none();
    }

    #[test]
    fn success_at_threshold_is_not_slow() {
        let outcome = Outcome::classify(ms(500), Ok(()), Some(ms(500)));

        assert_that(&outcome.is_failure()).is_false();
    }

    #[test]
    fn slow_success_exceeds_threshold() {
        let outcome = Outcome::classify(ms(700), Ok(()), Some(ms(500)));

        assert_that(&outcome.failure())
            .is_some()
            .is_equal_to(&Failure::ThresholdExceeded("lookup exceeded threshold of 500ms".to_string()));
    }

    #[test]
    fn zero_threshold_flags_every_success() {
        let outcome = Outcome::classify(Duration::from_nanos(1), Ok(()), Some(Duration::ZERO));

        assert_that(&outcome.is_failure()).is_true();
    }

    #[test]
    fn disabled_threshold_never_flags() {
        let outcome = Outcome::classify(Duration::from_secs(3600), Ok(()), None);

        assert_that(&outcome.is_failure()).is_false();
    }

    #[test]
    fn failed_lookup_is_resolution_error_even_if_slow() {
        let result: resolver::ResolverResult<()> = Err(resolver::Error::LookupError {
            reason: "no such host".to_string(),
        });

        let outcome = Outcome::classify(ms(700), result, Some(ms(500)));

        assert_that(&outcome.failure())
            .is_some()
            .is_equal_to(&Failure::ResolutionError("no such host".to_string()));
    }

    #[test]
    fn probe_measures_latency() {
        let resolver = ScriptedResolver::new(vec![Step::Resolve(ms(20))]);
        let probe = Probe::new(Arc::new(resolver), "example.com", Some(ms(500)));

        let outcome = probe.run();

        assert_that(&outcome.latency()).is_greater_than_or_equal_to(ms(20));
        assert_that(&outcome.is_failure()).is_false();
    }

    #[test]
    fn probe_passes_host_to_resolver() {
        let resolver = Arc::new(ScriptedResolver::new(vec![Step::Resolve(Duration::ZERO)]));
        let probe = Probe::new(resolver.clone(), "example.com", None);

        probe.run();

        assert_that(&resolver.hosts()).is_equal_to(vec!["example.com".to_string()]);
    }
}
