//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{Result, WalletError};

/// OpenWallet CLI: password-protected wallet reader.
#[derive(Parser)]
#[command(
    name = "openwallet",
    about = "Password-protected wallet reader",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Decrypt a wallet file and print its JSON payload
    Open {
        /// Path to the wallet file
        file: PathBuf,

        /// Wallet password (omit for interactive prompt)
        #[arg(long, env = "OPENWALLET_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Pretty-print the JSON payload
        #[arg(long)]
        pretty: bool,
    },

    /// Check wallet framing without decrypting
    Inspect {
        /// Path to the wallet file
        file: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the wallet password, trying in order:
/// 1. The `--password` flag / `OPENWALLET_PASSWORD` env var (CI/scripts)
/// 2. Interactive hidden prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on
/// drop.
pub fn resolve_password(flag: Option<&str>) -> Result<Zeroizing<String>> {
    if let Some(pw) = flag {
        return Ok(Zeroizing::new(pw.to_string()));
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter wallet password")
        .interact()
        .map_err(|e| WalletError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Read a wallet container as raw bytes.
///
/// `std::fs::read` performs no newline or encoding transformation, which
/// matters: the container is binary and any rewriting would corrupt it.
pub fn read_container(path: &Path) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_password_prefers_flag() {
        let pw = resolve_password(Some("hunter2")).expect("flag path never prompts");
        assert_eq!(pw.as_str(), "hunter2");
    }

    #[test]
    fn read_container_missing_file_is_io_error() {
        let err = read_container(Path::new("/nonexistent/test.wallet")).unwrap_err();
        assert!(matches!(err, WalletError::Io(_)));
    }
}
