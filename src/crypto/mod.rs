//! Cryptographic primitives for opening wallets.
//!
//! This module provides:
//! - AES-128-CBC block encryption/decryption with PKCS7 padding (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{decrypt, derive_key, ...};
pub use cipher::{decrypt, encrypt, BLOCK_LEN};
pub use kdf::{derive_key, generate_salt, WalletKey, KEY_LEN, PBKDF2_ITERATIONS};
