//! Conversion through an arbitrary-precision integer.

use crate::direction::{Direction, BYTE_RADIX};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Convert `digits` from radix [Direction::from] to radix [Direction::to].
///
/// The digits are first combined into `value = Σ digit[i] * from^(n-1-i)`, which is then
/// split by repeated division by the target radix.
pub fn repack(direction: &Direction, digits: &[u32]) -> Vec<u32> {
    let value = combine(direction.from(), digits);
    split(value, direction.to())
}

/// Fold big-endian `digits` in `radix` into a single integer.
fn combine(radix: u32, digits: &[u32]) -> BigUint {
    if radix == BYTE_RADIX {
        // Digits are bytes, which `num-bigint` can load directly.
        let bytes: Vec<u8> = digits.iter().map(|digit| *digit as u8).collect();
        return BigUint::from_bytes_be(&bytes);
    }
    digits
        .iter()
        .fold(BigUint::zero(), |value, digit| value * radix + *digit)
}

/// Split `value` into big-endian digits of `radix`, without leading zeros.
fn split(mut value: BigUint, radix: u32) -> Vec<u32> {
    if value.is_zero() {
        return Vec::new();
    }
    if radix <= BYTE_RADIX {
        return value
            .to_radix_be(radix)
            .into_iter()
            .map(u32::from)
            .collect();
    }

    let divisor = BigUint::from(radix);
    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&divisor);
        digits.push(remainder.iter_u32_digits().next().unwrap_or(0));
        value = quotient;
    }
    digits.reverse();
    digits
}
