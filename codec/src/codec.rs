//! Encode bytes as text (and back) under an [Alphabet].

use crate::{alphabet::Alphabet, check, strategy::Strategy, Error};
use radix_utils::leading;
use std::{iter, sync::Arc};

/// Converts bytes to and from text using an [Alphabet] and a conversion [Strategy].
///
/// Leading zero bytes are not part of the converted value. Each one is written as the
/// alphabet's zero symbol (and each leading zero symbol is read back as a zero byte), so the
/// mapping between bytes and text is a bijection.
#[derive(Clone, Debug)]
pub struct Codec {
    alphabet: Arc<Alphabet>,
    strategy: Strategy,
}

impl Codec {
    /// Create a new [Codec].
    pub fn new(alphabet: Arc<Alphabet>, strategy: Strategy) -> Self {
        Self { alphabet, strategy }
    }

    /// The alphabet used by this codec.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The conversion strategy used by this codec.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Encode `bytes` as text.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let zeros = leading(bytes, &0);
        let digits = bytes[zeros..].iter().map(|byte| u32::from(*byte)).collect();
        let digits = self.strategy.repack(self.alphabet.encoding(), digits);

        let mut text = String::with_capacity(zeros + digits.len());
        text.extend(iter::repeat(self.alphabet.zero()).take(zeros));
        self.alphabet.write_symbols(&digits, &mut text);
        text
    }

    /// Decode `text` into bytes.
    ///
    /// Fails if `text` contains a character that is not part of the alphabet.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let mut digits = self.alphabet.to_digits(text)?;
        let zeros = leading(&digits, &0);
        digits.drain(..zeros);
        let digits = self.strategy.repack(self.alphabet.decoding(), digits);

        let mut bytes = Vec::with_capacity(zeros + digits.len());
        bytes.resize(zeros, 0);
        // Digits are in radix 256.
        bytes.extend(digits.into_iter().map(|digit| digit as u8));
        Ok(bytes)
    }

    /// Encode `payload` followed by a 4-byte double-SHA-256 checksum.
    pub fn encode_with_check(&self, payload: &[u8]) -> String {
        self.encode(&check::append(payload))
    }

    /// Decode text produced by [Codec::encode_with_check], verifying and removing the checksum.
    ///
    /// Fails if `text` contains a character that is not part of the alphabet or if the
    /// checksum does not match the decoded payload.
    pub fn decode_with_check(&self, text: &str) -> Result<Vec<u8>, Error> {
        check::strip(self.decode(text)?)
    }
}
