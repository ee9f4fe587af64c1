// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

#[derive(Debug, Error)]
/// Main Error type of this crate.
///
/// Failed lookups are not errors in this sense; they are recorded as [`crate::Failure`]s of the
/// corresponding [`crate::Outcome`].
pub enum Error {
    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },
    #[error("failed to create resolver")]
    ResolverError {
        #[from]
        source: crate::resolver::Error,
    },
    #[error("worker {index} did not finish: {reason}")]
    WorkerFailed { index: usize, reason: String },
    #[error("failed to parse '{what}' to {to} because {why}")]
    ParserError {
        what: String,
        to: &'static str,
        why: String,
    },
    #[error("failed to execute IO operation")]
    IoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize to JSON")]
    SerJsonError {
        #[from]
        source: serde_json::Error,
    },
}
