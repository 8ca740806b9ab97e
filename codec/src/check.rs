//! Append and verify a 4-byte double-SHA-256 checksum.
//!
//! The checksum is the first [CHECKSUM_LENGTH] bytes of `sha256(sha256(payload))`, the same
//! convention used by base58check.

use crate::Error;
use radix_cryptography::{double_hash, Sha256};
use radix_utils::hex;
use tracing::debug;

/// Length of the checksum suffix in bytes.
pub const CHECKSUM_LENGTH: usize = 4;

/// Compute the checksum of `payload`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = double_hash::<Sha256>(payload);
    let mut check = [0u8; CHECKSUM_LENGTH];
    check.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    check
}

/// Returns `payload` followed by its checksum.
pub fn append(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    buf
}

/// Split the checksum off `buf` and verify it, returning the payload.
///
/// Buffers shorter than [CHECKSUM_LENGTH] cannot carry a checksum and are rejected.
pub fn strip(mut buf: Vec<u8>) -> Result<Vec<u8>, Error> {
    let Some(split) = buf.len().checked_sub(CHECKSUM_LENGTH) else {
        debug!(len = buf.len(), "payload too short for checksum");
        return Err(Error::ChecksumMismatch);
    };
    let found = buf.split_off(split);
    let expected = checksum(&buf);
    if found != expected {
        debug!(
            expected = hex(&expected),
            found = hex(&found),
            "checksum mismatch"
        );
        return Err(Error::ChecksumMismatch);
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_utils::from_hex;

    #[test]
    fn test_checksum() {
        // sha256(sha256("")) = 5df6e0e2...
        assert_eq!(checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);
        assert_eq!(append(b""), from_hex("5df6e0e2").unwrap());
    }

    #[test]
    fn test_strip() {
        // Test case 0: valid checksum
        let buf = append(b"payload");
        assert_eq!(buf.len(), 7 + CHECKSUM_LENGTH);
        assert_eq!(strip(buf).unwrap(), b"payload");

        // Test case 1: empty payload
        assert_eq!(strip(append(b"")).unwrap(), b"");

        // Test case 2: corrupted checksum
        let mut buf = append(b"payload");
        let last = buf.len() - 1;
        buf[last] ^= 1;
        assert_eq!(strip(buf), Err(Error::ChecksumMismatch));

        // Test case 3: corrupted payload
        let mut buf = append(b"payload");
        buf[0] ^= 1;
        assert_eq!(strip(buf), Err(Error::ChecksumMismatch));

        // Test case 4: too short
        assert_eq!(strip(vec![0x5d, 0xf6, 0xe0]), Err(Error::ChecksumMismatch));
        assert_eq!(strip(Vec::new()), Err(Error::ChecksumMismatch));
    }
}
