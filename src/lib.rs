// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! dnsslap runs a configurable number of workers that each resolve the same host name over and
//! over again using the platform resolver. Every lookup is timed and classified; the outcomes
//! are aggregated into a [`statistics::Report`] that carries the verdict whether any lookup
//! failed.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use dnsslap::resolver::SystemResolver;
//! use dnsslap::slap::{SlapConfig, WorkerPool};
//!
//! # async fn run() -> dnsslap::Result<()> {
//! let config = SlapConfig::new("example.com", 10, 100, Some(Duration::from_millis(500)))?;
//! let pool = WorkerPool::new(config, Arc::new(SystemResolver::new()));
//! let report = pool.slap().await?;
//! println!("errors found: {}", report.has_errors());
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "app-lib")]
pub mod app;
pub mod error;
pub mod output;
pub mod probe;
pub mod resolver;
pub mod slap;
pub mod statistics;
mod utils;

pub use error::Error;
pub use probe::{Failure, Outcome, Probe};
pub use statistics::Report;

pub type Result<T> = std::result::Result<T, Error>;
