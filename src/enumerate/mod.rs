//! Candidate enumeration - walk every label over the DNS alphabet
//!
//! The core is a mixed-radix odometer: each label is a base-37 numeral whose
//! digits are alphabet indices, incremented with carry propagation. Lengths
//! are exhausted in order, each from a fresh all-`a` state.

mod counter;
mod generator;

pub use counter::LabelCounter;
pub use generator::{enumerate_candidates, total_candidates, Enumerator, LabelGenerator};

/// Default upper bound on label length.
///
/// Kept as a default rather than a hidden constant; callers can raise or
/// lower it through [`crate::scanner::ScanConfig`] or `--max-length`.
pub const DEFAULT_MAX_LENGTH: usize = 10;
