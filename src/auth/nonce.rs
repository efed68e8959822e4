//! Replay-protection nonces
//!
//! Nonces are derived, not stored: HMAC-SHA256 over the subject and the
//! current time window, truncated to a short hex token. A nonce stays valid
//! through the current and previous window, so its effective lifetime is
//! between one and two half-TTLs.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Length of the issued nonce in hex characters
const NONCE_LEN: usize = 16;

/// Stateless nonce issuer and verifier
pub struct NonceStore {
    secret: Vec<u8>,
    ttl_secs: u64,
}

impl NonceStore {
    /// Create a store from the shared secret and nonce TTL
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            secret: secret.to_vec(),
            ttl_secs: ttl_secs.max(2),
        }
    }

    /// Issue a nonce for a subject in the current time window
    pub fn issue(&self, subject: &str) -> String {
        self.derive(subject, self.window(now_secs()))
    }

    /// Verify a nonce against the current and previous window
    pub fn verify(&self, subject: &str, nonce: &str) -> bool {
        let window = self.window(now_secs());
        nonce == self.derive(subject, window)
            || (window > 0 && nonce == self.derive(subject, window - 1))
    }

    fn window(&self, now: u64) -> u64 {
        now / (self.ttl_secs / 2)
    }

    fn derive(&self, subject: &str, window: u64) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC accepts keys of any length");
        mac.update(subject.as_bytes());
        mac.update(b":");
        mac.update(&window.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        hex::encode(digest)[..NONCE_LEN].to_string()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
