//! CLI command handlers, one per file.

mod config;
mod generate;

pub use config::run_config;
pub use generate::{run_generate, GenerateArgs};
