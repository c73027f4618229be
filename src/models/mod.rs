//! Domain types: the wallet entity and the request shape used to create or overwrite one.

pub mod wallet;

pub use wallet::{ErrorMessage, Wallet, WalletInput};
