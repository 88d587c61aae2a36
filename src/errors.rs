use thiserror::Error;

/// All errors that can occur while opening a wallet.
#[derive(Debug, Error)]
pub enum WalletError {
    // --- Framing errors ---
    #[error("File too small to be a wallet")]
    BufferTooSmall,

    #[error("Not a wallet file — magic bytes missing")]
    MagicMismatch,

    #[error("Wallet truncated — salt missing")]
    SaltTooShort,

    // --- Decryption errors ---
    /// Merged signal for every decryption-stage failure: wrong ciphertext
    /// length, malformed padding, and therefore also a wrong key. A unit
    /// variant with no nested cause, so callers cannot tell which
    /// sub-check failed (padding-oracle hardening).
    #[error("Wrong password")]
    WrongPassword,

    #[error("Wrong password or corrupted wallet — payload marker missing")]
    PasswordMagicMismatch,

    #[error("Wallet payload is not valid UTF-8")]
    PayloadNotUtf8,

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for wallet results.
pub type Result<T> = std::result::Result<T, WalletError>;
