// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::console::{Console, ConsoleOpts};
use crate::app::{AppConfig, ExitStatus};
use crate::output::{Output, OutputFormat};
use crate::slap::WorkerPool;
use crate::statistics::aggregate;

/// Runs the configured lookups, prints the report, and turns the verdict into an exit status.
pub async fn run(app_config: &AppConfig) -> Result<ExitStatus> {
    let console = Console::new(ConsoleOpts::from(app_config));
    let config = app_config.slap_config()?;
    console.print_slap_opts(&config, app_config.resolver);

    let resolver = app_config
        .resolver
        .build()
        .with_context(|| format!("failed to create {} resolver", app_config.resolver))?;
    let pool = WorkerPool::new(config, resolver);

    console.print_start(pool.config());
    let start_time = Instant::now();
    let outcomes = pool.run().await.context("failed to run workers")?;
    let total_run_time = Instant::now() - start_time;
    console.print_workers_finished();
    info!("Workers finished after {} ms.", total_run_time.as_millis());

    let report = aggregate(outcomes).await;
    console.print_statistics(&report, total_run_time);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    Output::new(&app_config.output_config)
        .output(&mut handle, &report)
        .context("Failed to print report to stdout.")?;

    console.print_verdict(report.has_errors());
    console.print_finished();

    Ok(ExitStatus::from_verdict(report.has_errors()))
}
