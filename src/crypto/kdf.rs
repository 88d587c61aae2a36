//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The wallet format fixes every KDF parameter: SHA-256 as the PRF hash,
//! 500 000 iterations, and a 16-byte key matching AES-128. Compatibility
//! with existing wallet files depends on these staying exact.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::wallet::format::SALT_LEN;

/// PBKDF2 iteration count.
///
/// Deliberately high so that a single derivation takes a noticeable
/// fraction of a second, slowing brute-force password guessing.
pub const PBKDF2_ITERATIONS: u32 = 500_000;

/// Length of the derived key in bytes (128 bits, for AES-128).
pub const KEY_LEN: usize = 16;

/// Derive the wallet key from a password and the wallet's salt.
///
/// Pure and deterministic: the same password + salt always produce the
/// same key. CPU-bound and blocking by design; callers that need
/// cancellation should wrap this in their own unit of work.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> WalletKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    WalletKey::new(key)
}

/// Generate a cryptographically random 16-byte salt.
///
/// Only used when sealing a new wallet; opening always reads the salt
/// from the container.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}

/// A wrapper around the 16-byte wallet key that zeroes its memory when
/// dropped, so the key cannot linger after the wallet is opened.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct WalletKey {
    bytes: [u8; KEY_LEN],
}

impl WalletKey {
    /// Create a new `WalletKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
