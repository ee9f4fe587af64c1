// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Blocking name resolution primitives.
//!
//! dnsslap does not speak DNS itself. It drives a resolution primitive that returns either the
//! addresses of a host or an opaque error. [`SystemResolver`] uses the platform resolver,
//! [`HickoryResolver`] uses `hickory-resolver` configured from the system configuration.

use std::fmt;
use std::net::{IpAddr, ToSocketAddrs};
use std::str::FromStr;
use std::sync::Arc;

use hickory_resolver::config::ResolverOpts;
use hickory_resolver::TokioResolver;
use tokio::runtime::Handle;
use tracing::debug;

pub use error::Error;

pub mod error;

pub type ResolverResult<T> = std::result::Result<T, Error>;

/// A blocking name resolution.
///
/// Implementations must issue a fresh request on every call. Callers run lookups on blocking
/// threads, so implementations may block for as long as the underlying primitive takes.
pub trait Resolve: Send + Sync {
    fn lookup(&self, host: &str) -> ResolverResult<Vec<IpAddr>>;
}

fn non_empty(host: &str, addrs: Vec<IpAddr>) -> ResolverResult<Vec<IpAddr>> {
    if addrs.is_empty() {
        Err(Error::NoAddresses { host: host.to_string() })
    } else {
        Ok(addrs)
    }
}

/// Resolves host names with the platform resolver, i.e. `getaddrinfo(3)` on Unix.
#[derive(Debug, Default, Clone)]
pub struct SystemResolver {}

impl SystemResolver {
    pub fn new() -> SystemResolver {
        SystemResolver {}
    }
}

impl Resolve for SystemResolver {
    fn lookup(&self, host: &str) -> ResolverResult<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = (host, 0).to_socket_addrs()?.map(|x| x.ip()).collect();
        non_empty(host, addrs)
    }
}

/// Resolves host names with `hickory-resolver` using the nameservers and options from
/// `/etc/resolv.conf`.
///
/// The response cache is disabled so every lookup reaches a nameserver.
pub struct HickoryResolver {
    resolver: TokioResolver,
    handle: Handle,
}

impl HickoryResolver {
    /// Must be called from within a Tokio runtime; lookups are driven on that runtime.
    pub fn from_system_config() -> ResolverResult<HickoryResolver> {
        let handle = Handle::try_current().map_err(|e| Error::InitError { reason: e.to_string() })?;

        let mut opts = ResolverOpts::default();
        opts.cache_size = 0;
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| Error::InitError { reason: e.to_string() })?
            .with_options(opts)
            .build();
        debug!("Created hickory resolver from system configuration.");

        Ok(HickoryResolver { resolver, handle })
    }
}

impl fmt::Debug for HickoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HickoryResolver").finish_non_exhaustive()
    }
}

impl Resolve for HickoryResolver {
    fn lookup(&self, host: &str) -> ResolverResult<Vec<IpAddr>> {
        let lookup = self.handle.block_on(self.resolver.lookup_ip(host))?;
        non_empty(host, lookup.iter().collect())
    }
}

/// Selects the resolution primitive to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverKind {
    #[default]
    System,
    Hickory,
}

impl ResolverKind {
    pub fn build(self) -> crate::Result<Arc<dyn Resolve>> {
        let resolver: Arc<dyn Resolve> = match self {
            ResolverKind::System => Arc::new(SystemResolver::new()),
            ResolverKind::Hickory => Arc::new(HickoryResolver::from_system_config()?),
        };
        Ok(resolver)
    }
}

impl FromStr for ResolverKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ResolverKind::System),
            "hickory" => Ok(ResolverKind::Hickory),
            _ => Err(crate::Error::ParserError {
                what: s.to_string(),
                to: "ResolverKind",
                why: "unsupported resolver".to_string(),
            }),
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            ResolverKind::System => "system",
            ResolverKind::Hickory => "hickory",
        };
        f.write_str(str)
    }
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn system_resolver_resolves_ip_literal() {
        let resolver = SystemResolver::new();

        let addrs = resolver.lookup("127.0.0.1");

        assert_that(&addrs)
            .is_ok()
            .is_equal_to(vec![IpAddr::from([127, 0, 0, 1])]);
    }

    #[test]
    fn empty_address_list_is_an_error() {
        let res = non_empty("example.com", Vec::new());

        assert_that(&res).is_err().is_equal_to(Error::NoAddresses {
            host: "example.com".to_string(),
        });
    }

    #[test]
    fn resolver_kind_from_str() {
        assert_that(&ResolverKind::from_str("system").ok()).is_equal_to(Some(ResolverKind::System));
        assert_that(&ResolverKind::from_str("hickory").ok()).is_equal_to(Some(ResolverKind::Hickory));
        assert_that(&ResolverKind::from_str("custom").is_err()).is_true();
    }

    #[test]
    fn hickory_resolver_needs_runtime() {
        let res = HickoryResolver::from_system_config();

        assert_that(&res.is_err()).is_true();
    }

    #[test]
    fn build_reports_resolver_init_failure() {
        let res = ResolverKind::Hickory.build();

        assert_that(&matches!(res, Err(crate::Error::ResolverError { .. }))).is_true();
    }

    #[test]
    fn build_system_resolver() {
        let resolver = ResolverKind::System.build().unwrap();

        assert_that(&resolver.lookup("127.0.0.1")).is_ok();
    }
}
