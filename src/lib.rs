//! Subforge - brute-force subdomain discovery
//!
//! Enumerates every candidate label over the 37-symbol DNS alphabet, prefixes
//! it to a base domain, and reports candidates that resolve to an IPv4 address.

pub mod alphabet;
pub mod domain;
pub mod enumerate;
pub mod error;
pub mod report;
pub mod resolve;
pub mod scanner;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use enumerate::{enumerate_candidates, Enumerator, LabelCounter, LabelGenerator, DEFAULT_MAX_LENGTH};
pub use error::{Result, SubforgeError};
pub use report::Reporter;
pub use resolve::{DnsResolver, Resolve};
pub use scanner::{ScanConfig, ScanSummary, Scanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
