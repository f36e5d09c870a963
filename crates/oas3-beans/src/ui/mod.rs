pub mod cli;
pub mod colors;
pub mod commands;
pub mod logging;

pub use cli::{Cli, Commands, GenerateCommand};
pub use colors::Colors;

#[cfg(test)]
mod tests;
