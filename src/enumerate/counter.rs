//! Mixed-radix counter backing the label enumeration

/// A fixed-width counter where every digit has the same radix.
///
/// Digits are stored most-significant first, each holding an alphabet index.
/// Incrementing propagates carries exactly like a car odometer; a full wrap
/// back to the all-zero state signals that every value has been visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCounter {
    digits: Vec<u8>,
    radix: u8,
}

impl LabelCounter {
    /// Create a counter of `length` digits, all zero.
    pub fn new(length: usize, radix: u8) -> Self {
        assert!(length > 0, "counter must have at least one digit");
        assert!(radix > 1, "radix must be at least 2");
        Self {
            digits: vec![0; length],
            radix,
        }
    }

    /// Current digits, most-significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Advance by one. Returns `true` exactly when the counter wraps back to
    /// the all-zero state, i.e. after `radix^length` increments from zero.
    pub fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return false;
            }
            *digit = 0;
        }
        true
    }

    /// Whether every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}
