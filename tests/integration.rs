//! Integration tests for subforge

use std::collections::HashSet;
use std::net::Ipv4Addr;

use async_trait::async_trait;
use subforge::{
    domain::validate_base_domain, enumerate_candidates, Enumerator, LabelGenerator, Reporter,
    Resolve, ScanConfig, Scanner,
};

struct StubResolver {
    hit: String,
    addr: Ipv4Addr,
}

#[async_trait]
impl Resolve for StubResolver {
    async fn resolve(&self, domain: &str) -> Option<Ipv4Addr> {
        (domain == self.hit).then_some(self.addr)
    }
}

#[test]
fn test_full_cross_product_per_length() {
    for length in 1..=3usize {
        let labels: HashSet<String> = LabelGenerator::new(length).collect();
        assert_eq!(labels.len() as u64, 37u64.pow(length as u32));
        assert!(labels.iter().all(|label| label.len() == length));
    }
}

#[test]
fn test_enumeration_order_boundaries() {
    let candidates: Vec<String> = Enumerator::new("example.com", 2).collect();

    // Length 1: a.<base> through -.<base>, exactly 37 of them.
    assert_eq!(candidates[0], "a.example.com");
    assert_eq!(candidates[36], "-.example.com");

    // Then the odometer restarts at all-`a` for length 2.
    assert_eq!(candidates[37], "aa.example.com");
    assert_eq!(candidates[38], "ab.example.com");
    assert_eq!(candidates.last().map(String::as_str), Some("--.example.com"));
}

#[test]
fn test_enumeration_is_idempotent() {
    let first: Vec<String> = Enumerator::new("example.com", 2).collect();
    let second: Vec<String> = Enumerator::new("example.com", 2).collect();
    assert_eq!(first, second);
}

#[test]
fn test_callback_driver_counts() {
    let mut seen = Vec::new();
    enumerate_candidates("example.com", 1, |candidate| seen.push(candidate.to_string()));
    assert_eq!(seen.len(), 37);
    assert_eq!(seen.first().map(String::as_str), Some("a.example.com"));
    assert_eq!(seen.last().map(String::as_str), Some("-.example.com"));
}

#[tokio::test]
async fn test_stub_resolver_single_hit() {
    let mut config = ScanConfig::new("example.com");
    config.max_length = 3;

    let scanner = Scanner::new(
        config,
        StubResolver {
            hit: "abc.example.com".to_string(),
            addr: Ipv4Addr::new(93, 184, 216, 34),
        },
    );

    let mut reporter = Reporter::new(Vec::new(), false);
    let summary = scanner.run(&mut reporter).await.unwrap();

    assert_eq!(summary.checked, 37 + 1369 + 50653);
    assert_eq!(summary.hits.len(), 1);

    // Non-verbose mode: the one hit is the only output line.
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(out, "abc.example.com --> 93.184.216.34\n");
}

#[tokio::test]
async fn test_no_hits_no_output() {
    let mut config = ScanConfig::new("example.com");
    config.max_length = 2;

    let scanner = Scanner::new(
        config,
        StubResolver {
            hit: "never.example.com".to_string(),
            addr: Ipv4Addr::new(10, 0, 0, 1),
        },
    );

    let mut reporter = Reporter::new(Vec::new(), false);
    let summary = scanner.run(&mut reporter).await.unwrap();

    assert!(summary.hits.is_empty());
    assert!(reporter.into_inner().is_empty());
}

#[test]
fn test_base_domain_validation() {
    assert!(validate_base_domain("example.com").is_ok());
    assert!(validate_base_domain("").is_err());
    assert!(validate_base_domain(&"a".repeat(129)).is_err());
}
