// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

pub mod cli_parser;
pub mod config;
pub mod console;
#[cfg(feature = "app-cli")]
pub mod logging;
pub mod run;
pub mod styles;

pub use config::AppConfig;

/// `ExitStatus` represents the exit states that will be return to the OS after termination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// All lookups succeeded within the threshold.
    Ok = 0,
    /// At least one lookup failed or exceeded the threshold.
    LookupsFailed = 1,
    /// CLI argument parsing failed.
    CliParsingFailed = 2,
    /// Config parsing failed.
    ConfigParsingFailed = 3,
    /// An unrecoverable error occurred. This is worst case and should not happen.
    UnrecoverableError = 4,
}

impl ExitStatus {
    pub fn from_verdict(errors_found: bool) -> ExitStatus {
        if errors_found {
            ExitStatus::LookupsFailed
        } else {
            ExitStatus::Ok
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn verdict_to_exit_status() {
        assert_that(&ExitStatus::from_verdict(false).code()).is_equal_to(0);
        assert_that(&ExitStatus::from_verdict(true).code()).is_equal_to(1);
    }
}
