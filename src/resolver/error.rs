// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_resolver::ResolveError;
use thiserror::Error;

/// Errors of the resolution primitives.
///
/// The rendered text of a lookup error is used verbatim to group failures, so `LookupError` only
/// displays the reason reported by the underlying resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{reason}")]
    LookupError { reason: String },
    #[error("no addresses found for {host}")]
    NoAddresses { host: String },
    #[error("failed to initialize resolver: {reason}")]
    InitError { reason: String },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::LookupError {
            reason: error.to_string(),
        }
    }
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Self {
        Error::LookupError {
            reason: error.to_string(),
        }
    }
}
