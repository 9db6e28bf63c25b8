//! The garden gate: a shared static passcode.
//!
//! There is no security model here. The digest only keeps the code out of
//! the config file in plain text.

use crate::core::constants::AUTH_KEY;
use crate::store::KeyValueStore;
use sha2::{Digest, Sha256};
use std::fmt::Write as _;

/// Lowercase hex SHA-256 of a passcode.
pub fn passcode_digest(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.trim().as_bytes());
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}

#[derive(Debug, Clone)]
pub struct PasscodeGate {
    digest: String,
}

impl PasscodeGate {
    pub fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into().to_ascii_lowercase(),
        }
    }

    pub fn check(&self, attempt: &str) -> bool {
        passcode_digest(attempt) == self.digest
    }

    /// Check `attempt` and remember a success in the store.
    pub fn unlock(&self, store: &dyn KeyValueStore, attempt: &str) -> bool {
        if !self.check(attempt) {
            log::info!("Rejected garden passcode attempt");
            return false;
        }
        if let Err(e) = store.set(AUTH_KEY, "true") {
            log::warn!("Could not remember login: {}", e);
        }
        true
    }

    pub fn is_unlocked(store: &dyn KeyValueStore) -> bool {
        store.get(AUTH_KEY).as_deref() == Some("true")
    }

    pub fn lock(store: &dyn KeyValueStore) {
        if let Err(e) = store.remove(AUTH_KEY) {
            log::warn!("Could not forget login: {}", e);
        }
    }
}
