//! Per-round secret keys and the generator that draws them.

use crate::error::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Length of a secret key in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Secret key for one round's commitment.
///
/// The buffer is zeroed when the key is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice, which must be exactly [`KEY_LEN`] bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, GameError> {
        let arr: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| GameError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Parse from a hex string
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        let bytes = hex::decode(s).map_err(|_| GameError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: s.len() / 2,
        })?;
        Self::from_slice(&bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.fill(0);
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        hex::encode(self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}

/// Draws fresh secret keys from a cryptographically secure source.
///
/// Defaults to the operating system's entropy source. A failure of the
/// source is reported as [`GameError::EntropyUnavailable`] and never retried.
#[derive(Debug, Default)]
pub struct KeyGenerator<R = OsRng> {
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Generator backed by the OS entropy source
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> KeyGenerator<R> {
    /// Generator backed by a caller-supplied secure source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a new random key
    pub fn generate(&mut self) -> Result<SecretKey, GameError> {
        let mut bytes = [0u8; KEY_LEN];
        if let Err(err) = self.rng.try_fill_bytes(&mut bytes) {
            tracing::error!(error = %err, "entropy source failed");
            return Err(GameError::EntropyUnavailable(err));
        }
        Ok(SecretKey(bytes))
    }
}
