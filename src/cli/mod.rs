//! Command-line interface module.

mod args;
pub mod check;
pub mod init;

pub use args::{CheckArgs, Cli, Commands};
