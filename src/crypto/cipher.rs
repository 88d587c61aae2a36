//! AES-128-CBC encryption and decryption with PKCS7 padding.
//!
//! The wallet body is plain CBC with no authentication tag, so the only
//! signals available after decryption are the padding bytes and the
//! password marker. To keep the padding check from becoming an oracle,
//! every failure in this module is reported as
//! [`WalletError::WrongPassword`] with no further detail.

use aes::Aes128;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::kdf::KEY_LEN;
use crate::errors::{Result, WalletError};

type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes128CbcEnc = cbc::Encryptor<Aes128>;

/// AES block size in bytes. Also the IV length.
pub const BLOCK_LEN: usize = 16;

/// Decrypt `ciphertext` and strip PKCS7 padding.
///
/// The ciphertext length must be a positive multiple of the block size.
/// Every failure — wrong length, malformed padding, and by extension a
/// wrong key — maps to the single `WrongPassword` variant. Callers must
/// not be able to tell which sub-check failed.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    iv: &[u8; BLOCK_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(WalletError::WrongPassword);
    }

    // Decrypt in place on an owned copy, then validate and strip padding.
    let mut buf = ciphertext.to_vec();
    let plaintext = Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| WalletError::WrongPassword)?;

    Ok(plaintext.to_vec())
}

/// Encrypt `plaintext`, padding it to a multiple of the block size.
///
/// Mirror of [`decrypt`]; used to seal wallet containers for round-trip
/// testing.
pub fn encrypt(key: &[u8; KEY_LEN], iv: &[u8; BLOCK_LEN], plaintext: &[u8]) -> Vec<u8> {
    Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}
