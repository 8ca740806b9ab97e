//! In-place conversion with repeated long division.
//!
//! # Algorithm
//!
//! Each pass divides the whole remaining number (held as big-endian digits of the source
//! radix) by the target radix, writing the quotient back into the same buffer and yielding the
//! remainder as the next least-significant output digit:
//!
//! ```text
//! remainder = 0
//! for digit in buffer[start..]:
//!     combined  = remainder * from + digit
//!     digit     = combined / to
//!     remainder = combined % to
//! ```
//!
//! Once the leading digit at `start` has been reduced to zero it can never become non-zero
//! again, so the next pass starts one position later. Conversion finishes when `start` passes
//! the end of the buffer. The number of emitted digits is also capped by
//! [Direction::estimate].
//!
//! Because `start` advances at most once per pass, the final passes may emit zeros that sit
//! above the most significant digit. Those are trimmed before the digits are reversed into
//! big-endian order.
//!
//! # Cost
//!
//! `O(output_len * input_len)` operations on values below `from * to`, with no allocation
//! beyond the output buffer.

use crate::direction::Direction;

/// Convert `digits` from radix [Direction::from] to radix [Direction::to], reusing `digits`
/// as scratch space.
pub fn repack(direction: &Direction, mut digits: Vec<u32>) -> Vec<u32> {
    let limit = direction.estimate(digits.len());
    let mut output = Vec::with_capacity(limit);
    let mut significant = 0;
    let mut start = 0;
    while start < digits.len() && output.len() < limit {
        let remainder = divmod(direction, &mut digits[start..]);
        if digits[start] == 0 {
            start += 1;
        }
        output.push(remainder);
        if remainder != 0 {
            significant = output.len();
        }
    }

    // Drop zeros emitted after the most significant digit and restore big-endian order.
    output.truncate(significant);
    output.reverse();
    output
}

/// Divide the big-endian number in `digits` by [Direction::to] in place, returning the
/// remainder.
fn divmod(direction: &Direction, digits: &mut [u32]) -> u32 {
    let from = u64::from(direction.from());
    let to = u64::from(direction.to());
    let mut remainder = 0u64;
    for digit in digits.iter_mut() {
        let combined = remainder * from + u64::from(*digit);
        *digit = (combined / to) as u32;
        remainder = combined % to;
    }
    remainder as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::BYTE_RADIX;

    #[test]
    fn test_divmod() {
        // 0x0102 = 258 = 25 * 10 + 8
        let direction = Direction::new(BYTE_RADIX, 10);
        let mut digits = [1, 2];
        assert_eq!(divmod(&direction, &mut digits), 8);
        assert_eq!(digits, [0, 25]);

        // 25 = 2 * 10 + 5
        assert_eq!(divmod(&direction, &mut digits[1..]), 5);
        assert_eq!(digits, [0, 2]);
    }

    #[test]
    fn test_repack() {
        // Test case 0: single byte into base 58 (255 = 4 * 58 + 23)
        let direction = Direction::new(BYTE_RADIX, 58);
        assert_eq!(repack(&direction, vec![255]), vec![4, 23]);

        // Test case 1: back again
        let direction = Direction::new(58, BYTE_RADIX);
        assert_eq!(repack(&direction, vec![4, 23]), vec![255]);

        // Test case 2: trailing zero digits in the output are kept
        let direction = Direction::new(BYTE_RADIX, 2);
        assert_eq!(repack(&direction, vec![8]), vec![1, 0, 0, 0]);

        // Test case 3: leading zeros in the input are skipped
        assert_eq!(repack(&direction, vec![0, 0, 3]), vec![1, 1]);

        // Test case 4: all zeros
        assert!(repack(&direction, vec![0, 0, 0]).is_empty());
    }

    #[test]
    fn test_repack_radix_above_byte() {
        // 0xffff = 65535 = 0 * 70000 + 65535
        let direction = Direction::new(BYTE_RADIX, 70_000);
        assert_eq!(repack(&direction, vec![0xff, 0xff]), vec![65_535]);

        let direction = Direction::new(70_000, BYTE_RADIX);
        assert_eq!(repack(&direction, vec![1, 0]), vec![1, 0x11, 0x70]);
    }

    #[test]
    fn test_repack_hello_world() {
        let direction = Direction::new(BYTE_RADIX, 58);
        let digits: Vec<u32> = b"hello world".iter().map(|b| u32::from(*b)).collect();
        // "StV1DL6CwTryKyV" in base58
        let expected: Vec<u32> = vec![
            25, 51, 28, 0, 12, 19, 5, 11, 54, 26, 49, 56, 18, 56, 28,
        ];
        assert_eq!(repack(&direction, digits), expected);
    }
}
