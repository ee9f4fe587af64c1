// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Concurrent lookups of one host.
//!
//! A [`WorkerPool`] starts `workers` [`Worker`]s, each on a dedicated OS thread, so all of them
//! resolve at the same time no matter how many there are. Each worker runs `iterations` probes in
//! sequence and sends the outcomes to one shared channel. The pool waits for all workers to
//! return, closes the channel, and hands the receiver to the aggregation.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::oneshot;
use tracing::{debug, info};

pub use worker::Worker;

use crate::probe::{Outcome, Probe};
use crate::resolver::Resolve;
use crate::statistics::{aggregate, Report};
use crate::{Error, Result};

mod worker;

/// Immutable parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlapConfig {
    host: String,
    workers: usize,
    iterations: usize,
    threshold: Option<Duration>,
}

impl SlapConfig {
    /// `threshold` of `None` disables the classification of slow lookups. A zero threshold
    /// classifies every successful lookup that takes any measurable time as slow.
    pub fn new<T: Into<String>>(
        host: T,
        workers: usize,
        iterations: usize,
        threshold: Option<Duration>,
    ) -> Result<SlapConfig> {
        let host = host.into();
        if host.is_empty() {
            return Err(Error::ConfigError {
                reason: "host name must not be empty".to_string(),
            });
        }
        if workers == 0 {
            return Err(Error::ConfigError {
                reason: "at least one worker is required".to_string(),
            });
        }
        if iterations == 0 {
            return Err(Error::ConfigError {
                reason: "at least one lookup per worker is required".to_string(),
            });
        }

        Ok(SlapConfig {
            host,
            workers,
            iterations,
            threshold,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn threshold(&self) -> Option<Duration> {
        self.threshold
    }

    pub fn total_lookups(&self) -> usize {
        self.workers.saturating_mul(self.iterations)
    }
}

pub struct WorkerPool {
    config: SlapConfig,
    resolver: Arc<dyn Resolve>,
}

impl WorkerPool {
    pub fn new(config: SlapConfig, resolver: Arc<dyn Resolve>) -> WorkerPool {
        WorkerPool { config, resolver }
    }

    pub fn config(&self) -> &SlapConfig {
        &self.config
    }

    /// Runs all workers to completion.
    ///
    /// Returns the receiver of the closed channel holding every outcome. Failed lookups are part
    /// of the outcomes; an error is only returned if a worker thread could not be started or did
    /// not finish, e.g. because it panicked.
    pub async fn run(&self) -> Result<UnboundedReceiver<Outcome>> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let probe = Probe::new(self.resolver.clone(), self.config.host.as_str(), self.config.threshold);

        info!(
            "Starting {} workers with {} lookups each.",
            self.config.workers, self.config.iterations
        );
        let mut workers = Vec::with_capacity(self.config.workers);
        for index in 0..self.config.workers {
            let worker = Worker::new(index, probe.clone(), self.config.iterations, sender.clone());
            workers.push(spawn_worker(worker)?);
        }

        let finished = join_all(workers).await;
        // Workers have dropped their senders by now; dropping the last one closes the channel.
        drop(sender);
        info!("All {} workers finished.", finished.len());

        for (index, res) in finished.into_iter().enumerate() {
            let sent = res.map_err(|_| Error::WorkerFailed {
                index,
                reason: "worker thread terminated without result".to_string(),
            })?;
            debug!("Worker {} sent {} outcomes.", index, sent);
        }

        Ok(receiver)
    }

    /// Runs all workers and aggregates their outcomes.
    pub async fn slap(&self) -> Result<Report> {
        let receiver = self.run().await?;
        Ok(aggregate(receiver).await)
    }
}

/// Starts `worker` on its own thread; the receiver resolves to the number of sent outcomes once
/// the worker returns and errs if the thread dies first.
fn spawn_worker(worker: Worker) -> Result<oneshot::Receiver<usize>> {
    let index = worker.index();
    let (done, finished) = oneshot::channel();
    thread::Builder::new()
        .name(format!("worker-{}", index))
        .spawn(move || {
            let _ = done.send(worker.run());
        })
        .map_err(|e| Error::WorkerFailed {
            index,
            reason: format!("failed to start thread: {}", e),
        })?;

    Ok(finished)
}
