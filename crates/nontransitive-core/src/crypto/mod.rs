//! Cryptographic primitives for the move commitment.
//!
//! This module provides:
//! - SecretKey and KeyGenerator for per-round keys
//! - Tag and `commit` for the keyed commitment (HMAC-SHA256)

mod commitment;
mod key;

pub use commitment::{commit, Tag, TAG_LEN};
pub use key::{KeyGenerator, SecretKey, KEY_LEN};
