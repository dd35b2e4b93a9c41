// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shelter_cli - command line front end for the offline-first pet listing.
//!
//! The binary wires the pieces together explicitly: one [`PetStore`] and
//! one HTTP service are built from the [`Config`] and handed to the
//! coordinators in `shelter-sync`. Nothing is global.
//!
//! [`PetStore`]: shelter_core::PetStore
//! [`Config`]: shelter_sync::Config

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod error;

pub use cli::{Cli, Command, ConfigCommand, DEFAULT_WAIT_SECS};
pub use error::{Error, Result};

use std::time::Duration;

use shelter_sync::{default_config_path, Config};

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);

    match cli.command {
        Command::List {
            pet_type,
            order,
            wait_secs,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let order = order.unwrap_or(config.order_by);
            commands::list::run(&config, pet_type, order, Duration::from_secs(wait_secs)).await
        }
        Command::Show {
            pet_type,
            id,
            picture,
            wait_secs,
        } => {
            let config = Config::load_or_default(&config_path)?;
            commands::show::run(&config, pet_type, id, picture, Duration::from_secs(wait_secs))
                .await
        }
        Command::Config(command) => commands::config::run(&config_path, command),
    }
}
