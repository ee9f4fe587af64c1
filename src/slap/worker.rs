// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::probe::{Outcome, Probe};

/// Runs a fixed number of probes one after another and sends every outcome to the pool's
/// channel.
///
/// A worker only holds a sender; it never closes the channel. The channel closes once the pool
/// drops the last sender after all workers have returned.
#[derive(Debug)]
pub struct Worker {
    index: usize,
    probe: Probe,
    iterations: usize,
    results: UnboundedSender<Outcome>,
}

impl Worker {
    pub fn new(index: usize, probe: Probe, iterations: usize, results: UnboundedSender<Outcome>) -> Worker {
        Worker {
            index,
            probe,
            iterations,
            results,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Blocks until all iterations are done; returns the number of outcomes sent.
    pub fn run(self) -> usize {
        debug!("Worker {} starting {} lookups of {}.", self.index, self.iterations, self.probe.host());
        let mut sent = 0;
        for _ in 0..self.iterations {
            let outcome = self.probe.run();
            if self.results.send(outcome).is_err() {
                warn!("Worker {} lost its receiver after {} lookups.", self.index, sent);
                break;
            }
            sent += 1;
        }
        debug!("Worker {} finished.", self.index);

        sent
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use spectral::prelude::*;
    use tokio::sync::mpsc;

    use super::*;
    use crate::probe::Failure;
    use crate::utils::tests::resolver::{ScriptedResolver, Step};

    #[test]
    fn sends_one_outcome_per_iteration_in_order() {
        let resolver = Arc::new(ScriptedResolver::new(vec![
            Step::Resolve(Duration::ZERO),
            Step::Fail(Duration::ZERO, "no such host"),
        ]));
        let probe = Probe::new(resolver.clone(), "example.com", None);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let sent = Worker::new(0, probe, 3, tx).run();

        assert_that(&sent).is_equal_to(3);
        assert_that(&resolver.calls()).is_equal_to(3);
        let failures: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|x| x.failure().map(Failure::message).map(ToString::to_string))
            .collect();
        assert_that(&failures).is_equal_to(vec![None, Some("no such host".to_string()), None]);
    }

    #[test]
    fn stops_when_receiver_is_gone() {
        let resolver = Arc::new(ScriptedResolver::new(vec![Step::Resolve(Duration::ZERO)]));
        let probe = Probe::new(resolver.clone(), "example.com", None);
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let sent = Worker::new(0, probe, 5, tx).run();

        assert_that(&sent).is_equal_to(0);
        assert_that(&resolver.calls()).is_equal_to(1);
    }
}
