//! `openwallet open` — decrypt a wallet file and print its payload.

use std::path::Path;

use crate::cli::{read_container, resolve_password};
use crate::errors::{Result, WalletError};
use crate::wallet;

/// Execute the `open` command.
pub fn execute(file: &Path, password: Option<&str>, pretty: bool) -> Result<()> {
    let container = read_container(file)?;
    let password = resolve_password(password)?;

    let payload = wallet::open(&container, password.as_bytes())?;

    if pretty {
        // The payload is opaque JSON; --pretty is the one place we parse it.
        let value: serde_json::Value = serde_json::from_str(&payload)
            .map_err(|e| WalletError::CommandFailed(format!("payload is not valid JSON: {e}")))?;
        let rendered = serde_json::to_string_pretty(&value)
            .map_err(|e| WalletError::CommandFailed(format!("render JSON: {e}")))?;
        println!("{rendered}");
    } else {
        println!("{payload}");
    }

    Ok(())
}
