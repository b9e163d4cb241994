//! The DNS label alphabet and its inverse lookup table

use std::sync::OnceLock;

/// All symbols a DNS label may contain: lowercase letters, digits, hyphen.
const SYMBOLS: [u8; 37] = *b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// The ordered 37-symbol alphabet used for label enumeration.
///
/// Index 0 (`a`) is the symbol every fresh digit position starts from.
/// The symbol-to-index table is derived from the symbol list at first use,
/// so the two cannot drift apart.
pub struct Alphabet {
    symbols: [u8; 37],
    index: [i8; 256],
}

impl Alphabet {
    fn build() -> Self {
        let mut index = [-1i8; 256];
        for (i, &b) in SYMBOLS.iter().enumerate() {
            debug_assert_eq!(index[b as usize], -1, "duplicate symbol in alphabet");
            index[b as usize] = i as i8;
        }
        Self {
            symbols: SYMBOLS,
            index,
        }
    }

    /// The process-wide alphabet instance.
    pub fn dns() -> &'static Alphabet {
        static INSTANCE: OnceLock<Alphabet> = OnceLock::new();
        INSTANCE.get_or_init(Alphabet::build)
    }

    /// Number of symbols (the enumeration radix).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in enumeration order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbol at the given digit index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; an out-of-range digit is a logic
    /// defect in the counter, not a runtime condition.
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    /// Digit index of a symbol, or `None` for bytes outside the alphabet.
    pub fn index_of(&self, symbol: u8) -> Option<u8> {
        match self.index[symbol as usize] {
            -1 => None,
            i => Some(i as u8),
        }
    }

    /// Number of distinct labels of the given length.
    pub fn total_combinations(&self, length: usize) -> u64 {
        (self.len() as u64).pow(length as u32)
    }
}
