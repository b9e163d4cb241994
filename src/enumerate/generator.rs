//! Label and candidate generators built on the mixed-radix counter

use super::counter::LabelCounter;
use crate::alphabet::Alphabet;

/// Generator for every label of one fixed length, in enumeration order.
///
/// Labels come out in increasing order when read as base-37 numerals with
/// alphabet-index digits: `a, b, ..., z, 0, ..., 9, -` for length 1, then
/// `aa, ab, ...` for length 2, ending at `--`.
pub struct LabelGenerator {
    alphabet: &'static Alphabet,
    counter: LabelCounter,
    current_index: u64,
    total: u64,
    exhausted: bool,
}

impl LabelGenerator {
    /// Create a new generator for labels of the given length.
    pub fn new(length: usize) -> Self {
        let alphabet = Alphabet::dns();
        let total = alphabet.total_combinations(length);
        Self {
            alphabet,
            counter: LabelCounter::new(length, alphabet.len() as u8),
            current_index: 0,
            total,
            exhausted: false,
        }
    }

    /// Get total number of labels this generator emits.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get current progress index.
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Check if generator is exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Render the current counter digits through the alphabet.
    fn render(&self) -> String {
        let bytes: Vec<u8> = self
            .counter
            .digits()
            .iter()
            .map(|&d| self.alphabet.symbol(d as usize))
            .collect();
        // Digits only ever hold alphabet indices, all of which are ASCII.
        String::from_utf8(bytes).expect("alphabet symbols are ASCII")
    }
}

impl Iterator for LabelGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let label = self.render();
        self.exhausted = self.counter.increment();
        self.current_index += 1;
        Some(label)
    }
}

/// Generator for full candidate domains across label lengths 1..=max.
///
/// Each length starts from a fresh all-`a` counter, independent of where the
/// previous length ended.
pub struct Enumerator {
    base_domain: String,
    max_length: usize,
    length: usize,
    labels: LabelGenerator,
    current_index: u64,
    total: u64,
}

impl Enumerator {
    /// Create an enumerator over `<label>.<base_domain>` candidates.
    ///
    /// The base domain is assumed pre-validated (see [`crate::domain`]).
    pub fn new(base_domain: impl Into<String>, max_length: usize) -> Self {
        assert!(max_length >= 1, "max_length must be at least 1");
        Self {
            base_domain: base_domain.into(),
            max_length,
            length: 1,
            labels: LabelGenerator::new(1),
            current_index: 0,
            total: total_candidates(max_length),
        }
    }

    /// Get total number of candidates across all lengths.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get current progress index.
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Remaining count.
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.current_index)
    }

    /// Check if all lengths have been exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.length >= self.max_length && self.labels.is_exhausted()
    }

    /// Label length currently being enumerated.
    pub fn current_length(&self) -> usize {
        self.length
    }

    /// Generate next batch of candidate domains.
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            match self.next() {
                Some(candidate) => batch.push(candidate),
                None => break,
            }
        }
        batch
    }
}

impl Iterator for Enumerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(label) = self.labels.next() {
                self.current_index += 1;
                return Some(format!("{}.{}", label, self.base_domain));
            }
            if self.length >= self.max_length {
                return None;
            }
            self.length += 1;
            self.labels = LabelGenerator::new(self.length);
        }
    }
}

/// Total number of candidates for lengths 1..=max_length.
pub fn total_candidates(max_length: usize) -> u64 {
    let alphabet = Alphabet::dns();
    (1..=max_length)
        .map(|length| alphabet.total_combinations(length))
        .sum()
}

/// Invoke `on_candidate` for every candidate domain, in enumeration order.
///
/// This is the serial driver: exactly `total_candidates(max_length)` calls,
/// no duplicates, no omissions.
pub fn enumerate_candidates<F>(base_domain: &str, max_length: usize, mut on_candidate: F)
where
    F: FnMut(&str),
{
    for candidate in Enumerator::new(base_domain, max_length) {
        on_candidate(&candidate);
    }
}
