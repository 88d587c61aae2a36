//! `openwallet inspect` — check wallet framing without decrypting.
//!
//! The wallet magic is stored in the clear, so a file can be recognized
//! (and its salt read) without a password and without paying for key
//! derivation.

use std::path::Path;

use crate::cli::{output, read_container};
use crate::crypto::BLOCK_LEN;
use crate::errors::Result;
use crate::wallet::format::{extract_salt, strip_wallet_magic};

/// Execute the `inspect` command.
pub fn execute(file: &Path) -> Result<()> {
    let container = read_container(file)?;

    let after_magic = strip_wallet_magic(&container)?;
    let (salt, ciphertext) = extract_salt(after_magic)?;

    output::success(&format!("{} is a wallet file", file.display()));
    output::info(&format!("salt: {}", hex::encode(salt)));
    output::info(&format!("ciphertext: {} bytes", ciphertext.len()));

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        output::warning("ciphertext length is not a positive multiple of 16 — truncated or corrupted");
    } else {
        output::tip("Run `openwallet open <FILE>` to decrypt it.");
    }

    Ok(())
}
