//! Resolver adapter - candidate domain to IPv4 address

use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error::Result;

/// Name-resolution seam used by the scanner.
///
/// Implementations return the first IPv4 address the underlying resolver
/// reports for the name, or `None` on any failure. Failure reasons
/// (NXDOMAIN, timeout, malformed name, no A record) are deliberately not
/// distinguished: a miss is the expected outcome for almost every candidate.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, domain: &str) -> Option<Ipv4Addr>;
}

/// Production resolver backed by the system DNS configuration.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Initialize the resolver from the system configuration.
    ///
    /// This is the single process-wide network-subsystem setup step; it must
    /// succeed before any resolution attempt and is never retried.
    pub fn from_system() -> Result<Self> {
        let inner = TokioAsyncResolver::tokio_from_system_conf()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Resolve for DnsResolver {
    async fn resolve(&self, domain: &str) -> Option<Ipv4Addr> {
        let lookup = match self.inner.lookup_ip(domain).await {
            Ok(lookup) => lookup,
            Err(e) => {
                tracing::trace!(domain = %domain, error = %e, "lookup failed");
                return None;
            }
        };

        // First A record wins; record ordering is whatever the system
        // resolver returned.
        lookup.iter().find_map(|addr| match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver {
        hit: &'static str,
        addr: Ipv4Addr,
    }

    #[async_trait]
    impl Resolve for FixedResolver {
        async fn resolve(&self, domain: &str) -> Option<Ipv4Addr> {
            (domain == self.hit).then_some(self.addr)
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let resolver: Box<dyn Resolve> = Box::new(FixedResolver {
            hit: "abc.example.com",
            addr: Ipv4Addr::new(93, 184, 216, 34),
        });

        assert_eq!(
            resolver.resolve("abc.example.com").await,
            Some(Ipv4Addr::new(93, 184, 216, 34))
        );
        assert_eq!(resolver.resolve("xyz.example.com").await, None);
    }
}
