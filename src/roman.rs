//! Roman numeral symbols and integer-to-numeral conversion.
//!
//! The seven canonical symbols and their values form an immutable, process-wide
//! table. Every other component in the crate speaks in terms of [`Symbol`], so a
//! letter that made it into a multiset, an extraction or a summation is always
//! one of `I V X L C D M`.
//!
//! # Examples
//!
//! ```
//! use chronogram::roman::{Symbol, to_roman};
//!
//! assert_eq!(to_roman(1994), "MCMXCIV");
//! assert_eq!(to_roman(0), "");
//! assert_eq!(Symbol::from_folded('x'), Some(Symbol::X));
//! assert_eq!(Symbol::X.value(), 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven canonical Roman numeral letters.
///
/// The declaration order (ascending value) is the display order used for
/// count tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    /// All symbols in ascending value order.
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Number of canonical symbols.
    pub const COUNT: usize = 7;

    /// The numeric value of this symbol.
    pub const fn value(self) -> i64 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// The uppercase letter for this symbol.
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Position of this symbol in [`Symbol::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Case-sensitive lookup: only the uppercase letters map to a symbol.
    pub const fn from_char(ch: char) -> Option<Symbol> {
        match ch {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Case-folding lookup.
    ///
    /// The character is uppercased first; it is a symbol only when the
    /// uppercase form is a single canonical letter. Characters whose uppercase
    /// form expands to several characters (e.g. `ß`) never match.
    pub fn from_folded(ch: char) -> Option<Symbol> {
        let mut upper = ch.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Symbol::from_char(u),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Smallest year with a numeral.
pub const MIN_YEAR: i64 = 1;

/// Largest year with a numeral.
pub const MAX_YEAR: i64 = 9999;

/// Descending (value, symbol group) pairs, subtractive shortcuts included.
const NUMERAL_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert an integer to its canonical subtractive-notation numeral.
///
/// Values outside 1..=9999 yield an empty string. Values above 3999 are
/// written with repeated `M`.
pub fn to_roman(n: i64) -> String {
    let mut remaining = n;
    let mut numeral = String::new();
    if !(MIN_YEAR..=MAX_YEAR).contains(&n) {
        return numeral;
    }

    for &(value, group) in NUMERAL_TABLE.iter() {
        while remaining >= value {
            numeral.push_str(group);
            remaining -= value;
        }
    }

    numeral
}

/// Parse a string of uppercase letters into symbols.
///
/// Returns `None` if any character is not a canonical uppercase symbol.
pub fn parse_symbols(numeral: &str) -> Option<Vec<Symbol>> {
    numeral.chars().map(Symbol::from_char).collect()
}
