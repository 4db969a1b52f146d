//! `smgen config` – show where the config lives and what is in effect.

use anyhow::Result;
use smgen_core::config::{self, SmgenConfig};

pub fn run_config(cfg: &SmgenConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
