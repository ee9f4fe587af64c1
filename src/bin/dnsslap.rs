// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::env;

use clap::error::ErrorKind;
use tracing::{debug, error};

use dnsslap::app::console::{Console, ConsoleOpts};
use dnsslap::app::logging::Logging;
use dnsslap::app::{cli_parser, run, styles, AppConfig, ExitStatus};

#[tokio::main]
async fn main() {
    let status = match cli_parser::create_parser().try_get_matches() {
        Ok(args) => start(args).await,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Ok,
                _ => ExitStatus::CliParsingFailed,
            }
        }
    };

    std::process::exit(status.code());
}

async fn start(args: clap::ArgMatches) -> ExitStatus {
    let console = Console::new(ConsoleOpts::default());
    let color = !args.get_flag("no-color");
    if !color {
        styles::no_color_mode();
    }
    if args.get_flag("ascii") {
        styles::ascii_mode();
    }

    let logging = Logging::new(args.get_count("v"), env::var_os("RUST_LOG"), color, args.get_flag("debug"));
    if let Err(err) = logging.start() {
        console.error(format!("Failed to set up logging: {:#}", err));
        return ExitStatus::UnrecoverableError;
    }
    debug!("Parsed args.");

    let config = match AppConfig::try_from(&args) {
        Ok(config) => config,
        Err(err) => {
            console.error(format!("Failed to parse configuration: {:#}", err));
            return ExitStatus::ConfigParsingFailed;
        }
    };
    debug!("Parsed config: {:?}", config);

    match run::run(&config).await {
        Ok(status) => status,
        Err(err) => {
            error!("Run failed: {:#}", err);
            console.error(format!("Error: {:#}", err));
            ExitStatus::UnrecoverableError
        }
    }
}
