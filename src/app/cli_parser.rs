// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

// This file is also compiled by `build.rs` to generate shell completions; it must only depend on
// `clap` and `humantime`.

use clap::builder::RangedU64ValueParser;
use clap::{Arg, ArgAction, Command};

pub fn create_parser() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("host")
                .index(1)
                .required(true)
                .num_args(1)
                .value_name("HOST")
                .help("Host name to resolve"),
        )
        .arg(
            Arg::new("concurrency")
                .short('c')
                .long("concurrency")
                .value_name("NUMBER")
                .default_value("10")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                .help("Sets how many concurrent workers run lookups"),
        )
        .arg(
            Arg::new("iterations")
                .short('n')
                .long("iterations")
                .value_name("NUMBER")
                .default_value("100")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                .help("Sets how many lookups each worker runs"),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_name("DURATION")
                .default_value("500ms")
                .value_parser(humantime::parse_duration)
                .help("Counts successful lookups slower than this as errors")
                .long_help(
                    "Counts successful lookups slower than this as errors, e.g., 250ms or 1s.
A threshold of 0s counts every successful lookup as an error.",
                ),
        )
        .arg(
            Arg::new("no-threshold")
                .long("no-threshold")
                .action(ArgAction::SetTrue)
                .conflicts_with("threshold")
                .help("Disables the latency threshold"),
        )
        .arg(
            Arg::new("resolver")
                .long("resolver")
                .value_name("RESOLVER")
                .default_value("system")
                .value_parser(["system", "hickory"])
                .help("Sets the resolver to slap")
                .long_help(
                    "* 'system': Uses the resolver of the operating system, i.e., getaddrinfo(3)
* 'hickory': Uses hickory-resolver configured from /etc/resolv.conf without caching",
                ),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .default_value("summary")
                .value_parser(["json", "summary"])
                .help("Sets the output format for the report"),
        )
        .arg(
            Arg::new("output-options")
                .long("output-options")
                .value_name("OPTIONS")
                .num_args(1..)
                .value_delimiter(',')
                .help("Sets output options")
                .long_help(
                    "* Json: 'pretty': Prettifies output
* Summary: 'human': Uses human readable latencies",
                ),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Does not print anything but the report"),
        )
        // This is a special option that is not reflected in AppConfig, but is checked during
        // setup in `dnsslap.rs`.
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disables colorful output"),
        )
        // This is a special option that is not reflected in AppConfig, but is checked during
        // setup in `dnsslap.rs` and sets the global AtomicBool `dnsslap::app::styles::ASCII_MODE`.
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .action(ArgAction::SetTrue)
                .help("Uses only ASCII compatible characters for output"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Uses debug formatting for logging -- much more verbose"),
        )
        .arg(
            Arg::new("v")
                .short('v')
                .action(ArgAction::Count)
                .help("Sets the level of verbosity"),
        )
}
