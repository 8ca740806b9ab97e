//! Memoize [Codec] construction per alphabet and strategy.
//!
//! Building an [Alphabet] validates its symbols, builds the symbol index, and derives the
//! size-estimation constants. A [Registry] pays that cost at most once per distinct
//! `(strategy, symbols)` pair and hands out shared, immutable [Codec]s afterwards.
//!
//! # Example
//!
//! ```rust
//! use radix_codec::{Config, Registry, Strategy};
//!
//! let registry = Registry::new(Config::default());
//!
//! // Use the configured strategy
//! let text = registry.encode(58u32, b"hello world").unwrap();
//! assert_eq!(text, "StV1DL6CwTryKyV");
//!
//! // Pick a strategy explicitly
//! let codec = registry.get("0123456789", Strategy::Direct).unwrap();
//! assert_eq!(codec.encode(b"\x01\x00"), "256");
//! ```

use crate::{
    alphabet::{Alphabet, Descriptor},
    codec::Codec,
    strategy::Strategy,
    Error,
};
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, Mutex, PoisonError},
};
use tracing::debug;

/// Configuration for a [Registry].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Strategy used when the caller does not name one.
    pub strategy: Strategy,
}

/// Lazily constructed, never evicted cache of [Codec]s.
///
/// A [Registry] is `Send + Sync`. Concurrent first requests for the same key serialize on an
/// internal lock, so exactly one [Codec] is constructed per key.
#[derive(Debug, Default)]
pub struct Registry {
    cfg: Config,
    codecs: Mutex<HashMap<(Strategy, String), Arc<Codec>>>,
}

impl Registry {
    /// Create a new, empty [Registry].
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            codecs: Mutex::new(HashMap::new()),
        }
    }

    /// Strategy used by the convenience methods.
    pub fn strategy(&self) -> Strategy {
        self.cfg.strategy
    }

    /// Returns the [Codec] for `descriptor` and `strategy`, constructing it on first use.
    pub fn get(
        &self,
        descriptor: impl Into<Descriptor>,
        strategy: Strategy,
    ) -> Result<Arc<Codec>, Error> {
        let descriptor = descriptor.into();
        let symbols = descriptor.symbols()?;

        // The map only ever grows, so a poisoned lock still holds valid entries.
        let mut codecs = self.codecs.lock().unwrap_or_else(PoisonError::into_inner);
        match codecs.entry((strategy, symbols.to_string())) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                let alphabet = Arc::new(Alphabet::new(symbols)?);
                let codec = Arc::new(Codec::new(alphabet, strategy));
                debug!(
                    radix = codec.alphabet().radix(),
                    %strategy,
                    "constructed codec"
                );
                Ok(entry.insert(codec).clone())
            }
        }
    }

    /// Returns the [Codec] for `descriptor` using the configured strategy.
    pub fn codec(&self, descriptor: impl Into<Descriptor>) -> Result<Arc<Codec>, Error> {
        self.get(descriptor, self.cfg.strategy)
    }

    /// Encode `bytes` under the alphabet referenced by `descriptor`.
    pub fn encode(
        &self,
        descriptor: impl Into<Descriptor>,
        bytes: &[u8],
    ) -> Result<String, Error> {
        Ok(self.codec(descriptor)?.encode(bytes))
    }

    /// Decode `text` under the alphabet referenced by `descriptor`.
    pub fn decode(
        &self,
        descriptor: impl Into<Descriptor>,
        text: &str,
    ) -> Result<Vec<u8>, Error> {
        self.codec(descriptor)?.decode(text)
    }

    /// Encode `payload` with a checksum under the alphabet referenced by `descriptor`.
    pub fn encode_with_check(
        &self,
        descriptor: impl Into<Descriptor>,
        payload: &[u8],
    ) -> Result<String, Error> {
        Ok(self.codec(descriptor)?.encode_with_check(payload))
    }

    /// Decode and verify checksummed `text` under the alphabet referenced by `descriptor`.
    pub fn decode_with_check(
        &self,
        descriptor: impl Into<Descriptor>,
        text: &str,
    ) -> Result<Vec<u8>, Error> {
        self.codec(descriptor)?.decode_with_check(text)
    }

    /// Number of cached codecs.
    pub fn len(&self) -> usize {
        self.codecs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if no codec has been constructed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
