//! Binary wallet container framing.
//!
//! A `.wallet` file has this layout:
//!
//! ```text
//! [wallet magic: 64 bytes][salt: 16 bytes][AES-128-CBC ciphertext]
//! ```
//!
//! - **Wallet magic**: fixed ASCII marker, stored in the clear so a file
//!   can be recognized before any key derivation happens.
//! - **Salt**: random per-wallet bytes fed into PBKDF2. The format reuses
//!   these same bytes as the CBC initialization vector (see
//!   [`crate::wallet::open`]).
//! - **Ciphertext**: the payload, padded to a multiple of 16 bytes.
//!
//! The decrypted plaintext starts with a second fixed marker (the
//! *password magic*) followed by the JSON payload. That marker only
//! matches when the password was correct.

use crate::errors::{Result, WalletError};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Marker at the start of every wallet file. A format constant, not a
/// secret.
pub const WALLET_MAGIC: [u8; 64] =
    *b"If I pull that off, will you die?\nIt would be extremely painful.";

/// Marker at the start of the decrypted plaintext. Encrypted together
/// with the payload; it proves the password was right.
pub const PASSWORD_MAGIC: [u8; 26] = *b"You're a big guy.\nFor you.";

/// Length of the salt stored after the wallet magic.
///
/// Equal to the AES block size on purpose: the format reuses the salt as
/// the CBC IV instead of storing a separate one. A future format version
/// should separate the two.
pub const SALT_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Magic check-and-strip
// ---------------------------------------------------------------------------

/// Why a marker failed to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StripError {
    /// Buffer shorter than the marker.
    TooShort,
    /// Marker bytes differ.
    Mismatch,
}

/// Check that `data` starts with `magic` and return the remainder.
///
/// Shared by the wallet-magic and password-magic checks; the two call
/// sites map [`StripError`] to their own stage-appropriate
/// [`WalletError`] variant.
pub(crate) fn check_and_strip<'a>(
    data: &'a [u8],
    magic: &[u8],
) -> std::result::Result<&'a [u8], StripError> {
    if data.len() < magic.len() {
        return Err(StripError::TooShort);
    }

    let (head, rest) = data.split_at(magic.len());
    if head != magic {
        return Err(StripError::Mismatch);
    }

    Ok(rest)
}

/// Strip the wallet magic from the front of a container.
///
/// Fails with `BufferTooSmall` when the file cannot even hold the marker,
/// and `MagicMismatch` when the marker bytes differ.
pub fn strip_wallet_magic(container: &[u8]) -> Result<&[u8]> {
    check_and_strip(container, &WALLET_MAGIC).map_err(|e| match e {
        StripError::TooShort => WalletError::BufferTooSmall,
        StripError::Mismatch => WalletError::MagicMismatch,
    })
}

/// Strip the password magic from decrypted plaintext.
///
/// Both failure modes collapse into `PasswordMagicMismatch`: padding has
/// already validated by the time this runs, so the distinction carries no
/// padding-oracle risk.
pub fn strip_password_magic(plaintext: &[u8]) -> Result<&[u8]> {
    check_and_strip(plaintext, &PASSWORD_MAGIC).map_err(|_| WalletError::PasswordMagicMismatch)
}

// ---------------------------------------------------------------------------
// Salt extraction
// ---------------------------------------------------------------------------

/// Split the 16-byte salt off the front of `data`.
///
/// Returns the salt by value together with the remaining bytes (the
/// ciphertext). No cryptographic work happens here.
pub fn extract_salt(data: &[u8]) -> Result<([u8; SALT_LEN], &[u8])> {
    if data.len() < SALT_LEN {
        return Err(WalletError::SaltTooShort);
    }

    let (head, rest) = data.split_at(SALT_LEN);
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(head);
    Ok((salt, rest))
}
