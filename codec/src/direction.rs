//! Bound the number of digits produced when converting between two radices.
//!
//! A [Direction] pairs a source radix with a target radix. Converting an `n`-digit
//! source value needs at most `ceil(n * ln(source) / ln(target))` target digits. The
//! logarithms are stored in fixed point with [LOG_SCALE] precision, rounding the
//! source log up and the target log down, so [Direction::estimate] can over-count
//! but never under-count.

/// Fixed-point scale applied to natural logarithms.
pub const LOG_SCALE: f64 = 10_000.0;

/// Radix of raw bytes.
pub const BYTE_RADIX: u32 = 256;

/// Conversion from one radix to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    from: u32,
    to: u32,
    from_log: u64,
    to_log: u64,
}

impl Direction {
    /// Create a new [Direction] converting digits in radix `from` into digits in radix `to`.
    ///
    /// # Panics
    ///
    /// Panics if either radix is less than 2.
    pub fn new(from: u32, to: u32) -> Self {
        assert!(from >= 2, "source radix must be at least 2");
        assert!(to >= 2, "target radix must be at least 2");
        Self {
            from,
            to,
            from_log: (f64::from(from).ln() * LOG_SCALE).ceil() as u64,
            to_log: (f64::from(to).ln() * LOG_SCALE).floor() as u64,
        }
    }

    /// Radix of the input digits.
    pub fn from(&self) -> u32 {
        self.from
    }

    /// Radix of the output digits.
    pub fn to(&self) -> u32 {
        self.to
    }

    /// Fixed-point `ln(from)`, rounded up.
    pub fn from_log(&self) -> u64 {
        self.from_log
    }

    /// Fixed-point `ln(to)`, rounded down.
    pub fn to_log(&self) -> u64 {
        self.to_log
    }

    /// Upper bound on the number of output digits needed for `len` input digits.
    pub fn estimate(&self, len: usize) -> usize {
        let numerator = len as u128 * u128::from(self.from_log);
        let denominator = u128::from(self.to_log);
        numerator.div_ceil(denominator) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};

    #[test]
    fn test_fixed_point_logs() {
        // ln(256) = 5.545177..., ln(2) = 0.693147...
        let direction = Direction::new(BYTE_RADIX, 2);
        assert_eq!(direction.from_log(), 55452);
        assert_eq!(direction.to_log(), 6931);

        let direction = Direction::new(2, BYTE_RADIX);
        assert_eq!(direction.from_log(), 6932);
        assert_eq!(direction.to_log(), 55451);
    }

    #[test]
    fn test_estimate() {
        let direction = Direction::new(BYTE_RADIX, 58);

        // Test case 0: no input
        assert_eq!(direction.estimate(0), 0);

        // Test case 1: a single byte needs two base-58 digits (255 = "5Q")
        assert_eq!(direction.estimate(1), 2);

        // Test case 2: bitcoin addresses (25 bytes) need at most 35 digits
        assert_eq!(direction.estimate(25), 35);
    }

    #[test]
    #[should_panic(expected = "target radix must be at least 2")]
    fn test_invalid_radix() {
        Direction::new(BYTE_RADIX, 1);
    }

    /// Number of radix-`to` digits needed for the largest `len`-digit radix-`from` value.
    fn exact(from: u32, to: u32, len: u32) -> usize {
        let max = BigUint::from(from).pow(len) - BigUint::one();
        if max.is_zero() {
            return 0;
        }
        max.to_radix_be(to).len()
    }

    #[test]
    fn test_estimate_never_undercounts() {
        for id in alphabets::ids() {
            for len in 0..=300u32 {
                let encoding = Direction::new(BYTE_RADIX, id);
                assert!(
                    encoding.estimate(len as usize) >= exact(BYTE_RADIX, id, len),
                    "encode radix={id} len={len}"
                );
                let decoding = Direction::new(id, BYTE_RADIX);
                assert!(
                    decoding.estimate(len as usize) >= exact(id, BYTE_RADIX, len),
                    "decode radix={id} len={len}"
                );
            }
        }
    }

    #[test]
    fn test_estimate_is_tight() {
        // Rounding the logs must not inflate the bound by more than a digit for
        // realistic input sizes.
        for id in alphabets::ids() {
            let direction = Direction::new(BYTE_RADIX, id);
            for len in [1u32, 32, 256, 1024] {
                assert!(direction.estimate(len as usize) <= exact(BYTE_RADIX, id, len) + 1);
            }
        }
    }
}
