//! Authentication and replay protection
//!
//! Every purge operation must come from a trusted caller: a configured
//! admin API key plus, for mutating operations, a short-lived nonce tied to
//! that key. The core driver has no authorization logic of its own; this
//! boundary is enforced before any store access happens.

pub mod nonce;

pub use nonce::NonceStore;

use crate::config::AuthConfig;
use crate::utils::error::{PurgeError, Result};
use sha2::{Digest, Sha256};

/// Authentication system holding admin key digests and the nonce store
pub struct AuthSystem {
    key_digests: Vec<[u8; 32]>,
    nonces: NonceStore,
}

impl AuthSystem {
    /// Build the auth system from configuration
    pub fn new(config: &AuthConfig) -> Result<Self> {
        if !config.admin_keys.is_empty() && config.nonce_secret.is_empty() {
            return Err(PurgeError::Config(
                "auth.nonce_secret is required when admin keys are configured".to_string(),
            ));
        }

        let key_digests = config
            .admin_keys
            .iter()
            .map(|key| Sha256::digest(key.as_bytes()).into())
            .collect();

        Ok(Self {
            key_digests,
            nonces: NonceStore::new(config.nonce_secret.as_bytes(), config.nonce_ttl_secs),
        })
    }

    /// Verify a presented admin API key
    ///
    /// With no keys configured the service refuses every caller rather than
    /// running open.
    pub fn verify_key(&self, presented: &str) -> Result<()> {
        if self.key_digests.is_empty() {
            return Err(PurgeError::unauthorized("no admin keys configured"));
        }

        let digest: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        if self.key_digests.iter().any(|known| ct_eq(known, &digest)) {
            Ok(())
        } else {
            Err(PurgeError::unauthorized("unknown admin key"))
        }
    }

    /// Issue a replay-protection nonce bound to the presented key
    pub fn issue_nonce(&self, api_key: &str) -> Result<String> {
        self.verify_key(api_key)?;
        Ok(self.nonces.issue(api_key))
    }

    /// Verify a nonce presented alongside an admin key
    pub fn verify_nonce(&self, api_key: &str, nonce: &str) -> Result<()> {
        self.verify_key(api_key)?;
        if self.nonces.verify(api_key, nonce) {
            Ok(())
        } else {
            Err(PurgeError::forbidden("invalid or expired nonce"))
        }
    }
}

/// Constant-time digest comparison
fn ct_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
