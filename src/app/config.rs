// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::output::json::JsonOptions;
use crate::output::summary::SummaryOptions;
use crate::output::{OutputConfig, OutputType};
use crate::resolver::ResolverKind;
use crate::slap::SlapConfig;

#[derive(Debug)]
pub struct AppConfig {
    pub host: String,
    pub workers: usize,
    pub iterations: usize,
    pub threshold: Option<Duration>,
    pub resolver: ResolverKind,
    pub quiet: bool,
    pub output: OutputType,
    pub output_config: OutputConfig,
}

impl AppConfig {
    pub fn slap_config(&self) -> Result<SlapConfig> {
        SlapConfig::new(self.host.as_str(), self.workers, self.iterations, self.threshold)
            .context("failed to create run configuration")
    }
}

impl TryFrom<&ArgMatches> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: &ArgMatches) -> std::result::Result<Self, Self::Error> {
        let output = args
            .get_one::<String>("output")
            .map(|x| OutputType::try_from(x.as_str()).context("failed to parse output type"))
            .context("no output type specified")??;
        let threshold = if args.get_flag("no-threshold") {
            None
        } else {
            args.get_one::<Duration>("threshold").copied()
        };
        let config = AppConfig {
            host: args
                .get_one::<String>("host")
                .context("no host to resolve specified")?
                .to_string(),
            workers: *args
                .get_one::<usize>("concurrency")
                .context("no number of workers specified")?,
            iterations: *args
                .get_one::<usize>("iterations")
                .context("no number of iterations specified")?,
            threshold,
            resolver: args
                .get_one::<String>("resolver")
                .map(|x| ResolverKind::from_str(x).context("failed to parse resolver"))
                .context("no resolver specified")??,
            quiet: args.get_flag("quiet"),
            output_config: output_config(output, args)?,
            output,
        };

        Ok(config)
    }
}

fn output_config(output_type: OutputType, args: &ArgMatches) -> Result<OutputConfig> {
    let options: Vec<&str> = args
        .get_many::<String>("output-options")
        .map(|xs| xs.map(String::as_str).collect())
        .unwrap_or_default();
    parse_output_options(output_type, options)
}

fn parse_output_options(output_type: OutputType, options: Vec<&str>) -> Result<OutputConfig> {
    match output_type {
        OutputType::Json => {
            let options = JsonOptions::try_from(options).context("failed to parse json options")?;
            Ok(OutputConfig::json(options))
        }
        OutputType::Summary => {
            let options = SummaryOptions::try_from(options).context("failed to parse summary options")?;
            Ok(OutputConfig::summary(options))
        }
    }
}
