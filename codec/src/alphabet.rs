//! Validated symbol sets and the mapping between symbols and digit values.

use crate::{
    alphabets,
    direction::{Direction, BYTE_RADIX},
    Error,
};
use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::{self, Display},
    str::FromStr,
};

/// An ordered set of unique symbols defining the digits of a positional numeral system.
///
/// The first symbol represents the digit value `0`, the second `1`, and so on. Besides the
/// symbol-to-digit index, an [Alphabet] precomputes the [Direction]s used to encode bytes into
/// its radix and to decode its digits back into bytes.
#[derive(Clone, Debug)]
pub struct Alphabet {
    text: String,
    symbols: Vec<char>,
    index: HashMap<char, u32>,
    encoding: Direction,
    decoding: Direction,
}

impl Alphabet {
    /// Validate `text` and build an [Alphabet] from its characters.
    ///
    /// Fails if `text` has fewer than two characters or contains a character more than once.
    pub fn new(text: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() < 2 {
            return Err(Error::AlphabetTooSmall(symbols.len()));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (position, symbol) in symbols.iter().enumerate() {
            match index.entry(*symbol) {
                Entry::Occupied(first) => {
                    return Err(Error::DuplicateSymbol(
                        *symbol,
                        *first.get() as usize,
                        position,
                    ));
                }
                Entry::Vacant(slot) => {
                    // Unique `char`s are bounded by `char::MAX`, so positions fit in a `u32`.
                    slot.insert(position as u32);
                }
            }
        }

        let radix = symbols.len() as u32;
        Ok(Self {
            text: text.to_string(),
            symbols,
            index,
            encoding: Direction::new(BYTE_RADIX, radix),
            decoding: Direction::new(radix, BYTE_RADIX),
        })
    }

    /// Number of symbols (and therefore distinct digit values).
    pub fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Symbol representing the digit value `0`.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Symbols ordered by digit value.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The symbols as the string the alphabet was built from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the digit value of `symbol`, if it belongs to the alphabet.
    pub fn digit(&self, symbol: char) -> Option<u32> {
        self.index.get(&symbol).copied()
    }

    /// Conversion from bytes (radix 256) to this alphabet's radix.
    pub fn encoding(&self) -> &Direction {
        &self.encoding
    }

    /// Conversion from this alphabet's radix to bytes (radix 256).
    pub fn decoding(&self) -> &Direction {
        &self.decoding
    }

    /// Map every character of `text` to its digit value.
    ///
    /// Fails on the first character that is not part of the alphabet, reporting its
    /// (character) position.
    pub fn to_digits(&self, text: &str) -> Result<Vec<u32>, Error> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.digit(symbol)
                    .ok_or(Error::InvalidSymbol(symbol, position))
            })
            .collect()
    }

    /// Map digit values to symbols, appending them to `out`.
    ///
    /// # Panics
    ///
    /// Panics if any digit is not less than [Alphabet::radix].
    pub fn write_symbols(&self, digits: &[u32], out: &mut String) {
        out.reserve(digits.len());
        out.extend(digits.iter().map(|digit| self.symbols[*digit as usize]));
    }

    /// Map digit values to symbols.
    ///
    /// # Panics
    ///
    /// Panics if any digit is not less than [Alphabet::radix].
    pub fn to_symbols(&self, digits: &[u32]) -> String {
        let mut out = String::new();
        self.write_symbols(digits, &mut out);
        out
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Alphabet {}

impl Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Reference to an [Alphabet]: either an id from the predefined table or literal symbols.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// An id from [crate::alphabets::PREDEFINED].
    Id(u32),
    /// Symbols spelled out in full.
    Literal(String),
}

impl Descriptor {
    /// Returns the symbols this descriptor refers to without validating them.
    pub fn symbols(&self) -> Result<&str, Error> {
        match self {
            Self::Id(id) => alphabets::lookup(*id).ok_or(Error::UnknownAlphabet(*id)),
            Self::Literal(text) => Ok(text),
        }
    }

    /// Resolve the descriptor into a validated [Alphabet].
    pub fn resolve(&self) -> Result<Alphabet, Error> {
        Alphabet::new(self.symbols()?)
    }
}

impl From<u32> for Descriptor {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for Descriptor {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for Descriptor {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}
