//! Subcommands of the lexkit CLI, one per file.

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use init::{run_init, InitArgs};
pub use tokens::{run_tokens, TokensArgs};
