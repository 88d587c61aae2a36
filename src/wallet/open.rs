//! The decrypt-and-verify pipeline.
//!
//! Data flows strictly forward:
//!
//! ```text
//! raw bytes → strip wallet magic → extract salt → derive key
//!           → decrypt → strip password magic → payload
//! ```
//!
//! The first failing stage terminates the pipeline; no stage retries and
//! no partial result is ever returned.

use crate::crypto;
use crate::errors::{Result, WalletError};
use crate::wallet::format::{self, SALT_LEN};

/// Open a wallet container with the given password and return the
/// decrypted JSON payload.
pub fn open(container: &[u8], password: &[u8]) -> Result<String> {
    let after_magic = format::strip_wallet_magic(container)?;
    let (salt, ciphertext) = format::extract_salt(after_magic)?;

    let key = crypto::derive_key(password, &salt);

    // Format quirk: the salt doubles as the CBC IV. This must stay exact
    // to read existing wallet files; a future format version should store
    // a separate IV.
    let iv = &salt;

    let plaintext = crypto::decrypt(key.as_bytes(), iv, ciphertext)?;

    let payload = format::strip_password_magic(&plaintext)?;

    String::from_utf8(payload.to_vec()).map_err(|_| WalletError::PayloadNotUtf8)
}

/// Build a wallet container around `payload`, drawing a fresh random
/// salt.
///
/// Mirror of [`open`]. The CLI does not expose it; round-trip tests and
/// callers that need to produce fixture wallets do.
pub fn seal(payload: &str, password: &[u8]) -> Vec<u8> {
    seal_with_salt(payload, password, &crypto::generate_salt())
}

/// Build a wallet container with a caller-chosen salt (test vectors,
/// deterministic fixtures).
pub fn seal_with_salt(payload: &str, password: &[u8], salt: &[u8; SALT_LEN]) -> Vec<u8> {
    let key = crypto::derive_key(password, salt);

    let mut plaintext = Vec::with_capacity(format::PASSWORD_MAGIC.len() + payload.len());
    plaintext.extend_from_slice(&format::PASSWORD_MAGIC);
    plaintext.extend_from_slice(payload.as_bytes());

    // Same salt-as-IV reuse as `open`.
    let ciphertext = crypto::encrypt(key.as_bytes(), salt, &plaintext);

    let mut container =
        Vec::with_capacity(format::WALLET_MAGIC.len() + SALT_LEN + ciphertext.len());
    container.extend_from_slice(&format::WALLET_MAGIC);
    container.extend_from_slice(salt);
    container.extend_from_slice(&ciphertext);
    container
}
