//! Encode bytes as text under arbitrary positional-numeral alphabets.
//!
//! # Overview
//!
//! Bytes are treated as the big-endian digits of a base-256 number and re-expressed in the
//! radix of an [Alphabet] (base58, base62, a base64-style charset, or any set of at least two
//! unique characters). Leading zero bytes map one-to-one onto leading zero symbols, so every
//! byte sequence (including the empty one) has exactly one textual form.
//!
//! Text can optionally carry a checksum: [Codec::encode_with_check] appends the first four
//! bytes of `sha256(sha256(payload))` before encoding (the base58check convention) and
//! [Codec::decode_with_check] rejects text whose checksum does not match.
//!
//! # Strategies
//!
//! The digit conversion is performed by one of two [Strategy]s, chosen when a [Codec] is built:
//!
//! - [Strategy::BigInt] (the default) converts through an arbitrary-precision integer.
//! - [Strategy::Direct] converts in place with repeated long division and never needs an
//!   arbitrary-precision type.
//!
//! Both produce identical output for every input.
//!
//! # Predefined Alphabets
//!
//! [alphabets::PREDEFINED] pins the symbols behind the numeric ids `2`, `8`, `11`, `16`, `32`,
//! `36`, `58`, `62`, `64`, and `66`. A [Descriptor] refers to an alphabet either by one of these
//! ids or by its literal symbols.
//!
//! # Example
//!
//! ```rust
//! use radix_codec::{Alphabet, Codec, Error, Strategy};
//! use std::sync::Arc;
//!
//! let alphabet = Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz").unwrap();
//! let codec = Codec::new(Arc::new(alphabet), Strategy::Direct);
//!
//! // Leading zero bytes become leading zero symbols
//! assert_eq!(codec.encode(b"\x00\x00hello world"), "11StV1DL6CwTryKyV");
//! assert_eq!(codec.decode("11StV1DL6CwTryKyV").unwrap(), b"\x00\x00hello world");
//!
//! // Checksummed text detects corruption
//! let text = codec.encode_with_check(b"hello world");
//! assert_eq!(codec.decode_with_check(&text).unwrap(), b"hello world");
//! assert_eq!(codec.decode_with_check("StV1DL6CwTryKyV"), Err(Error::ChecksumMismatch));
//! ```

pub mod alphabet;
pub mod alphabets;
pub mod check;
pub mod codec;
pub mod direction;
pub mod error;
pub mod registry;
pub mod strategy;

// Re-export main types
pub use alphabet::{Alphabet, Descriptor};
pub use codec::Codec;
pub use direction::Direction;
pub use error::Error;
pub use registry::{Config, Registry};
pub use strategy::Strategy;
