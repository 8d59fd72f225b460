//! Keyed commitment to the opponent's move.

use super::key::{SecretKey, KEY_LEN};
use crate::error::GameError;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Length of a commitment tag in bytes
pub const TAG_LEN: usize = 32;

/// Tag = HMAC-SHA256(key, move name as UTF-8)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag([u8; TAG_LEN]);

impl Tag {
    /// Compute the tag binding `move_name` to `key`
    pub fn compute(move_name: &str, key: &SecretKey) -> Result<Self, GameError> {
        let mac = keyed_mac(move_name, key.as_bytes())?;
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Check that the revealed move and key reproduce this tag
    pub fn verify(&self, move_name: &str, key: &SecretKey) -> bool {
        keyed_mac(move_name, key.as_bytes())
            .map(|mac| mac.verify_slice(&self.0).is_ok())
            .unwrap_or(false)
    }
}

/// Commit to `move_name` under `key`
pub fn commit(move_name: &str, key: &SecretKey) -> Result<Tag, GameError> {
    Tag::compute(move_name, key)
}

fn keyed_mac(move_name: &str, key: &[u8]) -> Result<HmacSha256, GameError> {
    if key.len() != KEY_LEN {
        return Err(GameError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        });
    }
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| GameError::InvalidKeyLength {
        expected: KEY_LEN,
        actual: key.len(),
    })?;
    mac.update(move_name.as_bytes());
    Ok(mac)
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        hex::encode(self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        let arr: [u8; TAG_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 32 bytes"))?;
        Ok(Self(arr))
    }
}
