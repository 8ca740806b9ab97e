//! Re-express a big-endian digit sequence from one radix in another.
//!
//! Two interchangeable strategies are provided:
//!
//! - [Strategy::BigInt] folds all digits into a single arbitrary-precision integer (via
//!   `num-bigint`) and then splits it into digits of the target radix.
//! - [Strategy::Direct] performs schoolbook long division over a mutable copy of the input,
//!   extracting one output digit per pass. Intermediate values never exceed
//!   `source_radix * target_radix`, so no arbitrary-precision type is needed.
//!
//! Both strategies accept input with leading zero digits and return the shortest digit
//! sequence representing the same value (empty for zero). Preserving leading zeros is left
//! to [crate::Codec].

use crate::{direction::Direction, Error};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

pub mod bigint;
pub mod direct;

/// Algorithm used to convert digits between radices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Convert through an arbitrary-precision integer.
    #[default]
    BigInt,
    /// Convert in place with repeated long division.
    Direct,
}

impl Strategy {
    /// Every available strategy.
    pub const ALL: [Strategy; 2] = [Strategy::BigInt, Strategy::Direct];

    /// Stable name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BigInt => "bigint",
            Self::Direct => "direct",
        }
    }

    /// Convert `digits` (radix [Direction::from], most significant first) into digits of
    /// radix [Direction::to].
    ///
    /// Every digit must be less than [Direction::from].
    pub fn repack(&self, direction: &Direction, digits: Vec<u32>) -> Vec<u32> {
        match self {
            Self::BigInt => bigint::repack(direction, &digits),
            Self::Direct => direct::repack(direction, digits),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}
