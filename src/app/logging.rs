// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::OsString;

use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Log events go to stderr; stdout carries the report.
///
/// Worker threads are named `worker-<index>`, so thread names are always part of an event.
pub struct Logging {
    verbosity: u8,
    rust_log: Option<OsString>,
    color: bool,
    debug: bool,
}

impl Logging {
    pub fn new(verbosity: u8, rust_log: Option<OsString>, color: bool, debug: bool) -> Logging {
        Logging {
            verbosity,
            rust_log,
            color,
            debug,
        }
    }

    fn log_level(verbosity: u8) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// `RUST_LOG` wins over `-v`.
    fn directive(&self) -> Option<String> {
        if self.rust_log.is_some() {
            None
        } else {
            let level = Logging::log_level(self.verbosity).to_string().to_lowercase();
            Some(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    }

    pub fn start(self) -> Result<()> {
        LogTracer::init()?;

        let filter = match self.directive() {
            Some(directive) => EnvFilter::new(directive),
            None => EnvFilter::from_default_env(),
        };
        let span_events = if self.debug { FmtSpan::FULL } else { FmtSpan::NONE };
        let fmt = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.color)
            .with_thread_names(true)
            .with_target(self.debug)
            .with_span_events(span_events);

        set_global_default(tracing_subscriber::registry().with(filter).with(fmt))?;

        Ok(())
    }
}
