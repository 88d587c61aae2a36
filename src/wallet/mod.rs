//! Wallet module — container framing and the open/seal pipeline.
//!
//! This module provides:
//! - Format constants and prefix parsing (`format`)
//! - The decrypt-and-verify pipeline plus its seal mirror (`open`)

pub mod format;
pub mod open;

// Re-export the most commonly used items.
pub use format::{PASSWORD_MAGIC, SALT_LEN, WALLET_MAGIC};
pub use open::{open, seal, seal_with_salt};
