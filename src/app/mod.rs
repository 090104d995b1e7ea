//! Command-line front end

pub mod cli;
mod commands;

pub use cli::{AnalyzeArgs, Cli, CollectArgs, Commands};
