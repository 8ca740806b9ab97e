//! Hash payloads for checksummed radix encodings.
//!
//! # Status
//!
//! `radix-cryptography` is **ALPHA** software and is not yet recommended for production use. Developers should
//! expect breaking changes and occasional instability.

use std::fmt::Debug;

pub mod sha256;
pub use sha256::{hash, Digest, Sha256};

/// Interface that a cryptographic hash function must implement.
///
/// Unlike the underlying hashers, calling [Hasher::finalize] resets the state so
/// the same instance can be reused for the next message.
pub trait Hasher: Clone + Send + Sync + 'static {
    /// Digest generated by the hash function.
    type Digest: AsRef<[u8]> + Copy + Eq + Debug + Send + Sync;

    /// Create a new hasher.
    fn new() -> Self;

    /// Append message to previously recorded data.
    fn update(&mut self, message: &[u8]);

    /// Hash all recorded data and reset the hasher to the initial state.
    fn finalize(&mut self) -> Self::Digest;

    /// Reset the hasher without generating a hash.
    ///
    /// This function does not need to be called after `finalize`.
    fn reset(&mut self);
}

/// Hash `message` twice (`H(H(message))`).
///
/// With [Sha256] this is the double-SHA-256 convention used by base58check and
/// by the checksum suffix of checked radix encodings.
pub fn double_hash<H: Hasher>(message: &[u8]) -> H::Digest {
    let mut hasher = H::new();
    hasher.update(message);
    let first = hasher.finalize();
    hasher.update(first.as_ref());
    hasher.finalize()
}
