// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use shelter_sync::Config;

use crate::cli::ConfigCommand;
use crate::error::{Error, Result};

pub fn run(path: &Path, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = Config::load_or_default(path)?;
            print!("{}", render(&config)?);
            println!("# database: {}", config.db_path().display());
        }
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Init { force } => {
            init(path, force)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

pub(crate) fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| Error::RenderConfig(e.to_string()))
}

pub(crate) fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.display().to_string()));
    }
    Config::default().save(path)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
