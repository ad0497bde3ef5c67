pub mod commands;
pub mod reports;

pub use commands::{Cli, Commands};
