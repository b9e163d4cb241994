//! Subdomain scanner - drives enumeration through the resolver

use std::io::Write;
use std::net::Ipv4Addr;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::enumerate::{Enumerator, DEFAULT_MAX_LENGTH};
use crate::error::Result;
use crate::report::Reporter;
use crate::resolve::Resolve;

/// Scan configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Base domain every label is prefixed to
    pub base_domain: String,
    /// Upper bound on label length (inclusive)
    pub max_length: usize,
    /// Concurrent in-flight resolutions
    pub concurrency: usize,
    /// Candidates pulled from the enumerator per batch
    pub batch_size: usize,
}

impl ScanConfig {
    /// Config for a pre-validated base domain, with default bounds.
    pub fn new(base_domain: impl Into<String>) -> Self {
        Self {
            base_domain: base_domain.into(),
            max_length: DEFAULT_MAX_LENGTH,
            concurrency: 16,
            batch_size: 64,
        }
    }
}

/// Outcome of a completed scan
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// Candidates resolved (hit or miss)
    pub checked: u64,
    /// Successful resolutions, in enumeration order
    pub hits: Vec<(String, Ipv4Addr)>,
}

/// Scanner for brute-forcing subdomains of a base domain
pub struct Scanner<R: Resolve> {
    config: ScanConfig,
    resolver: Arc<R>,
    semaphore: Arc<Semaphore>,
}

impl<R: Resolve + 'static> Scanner<R> {
    /// Create a new scanner over the given resolver.
    pub fn new(config: ScanConfig, resolver: R) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
        Self {
            config,
            resolver: Arc::new(resolver),
            semaphore,
        }
    }

    /// Get scanner configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the scan to completion, reporting every outcome.
    ///
    /// Candidates within a batch resolve concurrently, but `join_all` returns
    /// results in input order, so records reach the reporter in enumeration
    /// order. With `concurrency = 1` this degenerates to the serial loop.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<ScanSummary> {
        let mut enumerator = Enumerator::new(&self.config.base_domain, self.config.max_length);
        let total = enumerator.total();
        let mut summary = ScanSummary::default();

        tracing::info!(
            base_domain = %self.config.base_domain,
            max_length = %self.config.max_length,
            total_candidates = %total,
            "starting scan"
        );

        while !enumerator.is_exhausted() {
            let batch = enumerator.next_batch(self.config.batch_size);
            if batch.is_empty() {
                break;
            }

            let futures: Vec<_> = batch
                .iter()
                .map(|domain| {
                    let domain = domain.clone();
                    let resolver = Arc::clone(&self.resolver);
                    let semaphore = Arc::clone(&self.semaphore);

                    async move {
                        let _permit = semaphore.acquire().await.ok()?;
                        resolver.resolve(&domain).await
                    }
                })
                .collect();

            let results = join_all(futures).await;

            for (domain, addr) in batch.iter().zip(results) {
                reporter.record(domain, addr)?;
                if let Some(ip) = addr {
                    summary.hits.push((domain.clone(), ip));
                }
                summary.checked += 1;
            }

            tracing::debug!(
                checked = %summary.checked,
                total = %total,
                hits = %summary.hits.len(),
                "batch complete"
            );
        }

        tracing::info!(
            checked = %summary.checked,
            hits = %summary.hits.len(),
            "scan complete"
        );

        Ok(summary)
    }
}
