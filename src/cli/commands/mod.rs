//! Command implementations for the OpenWallet CLI.

pub mod inspect;
pub mod open;
