// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelter_core::PetType;
use shelter_sync::OrderBy;

use crate::help;

/// Seconds to wait for the shelter before giving up on a refresh.
pub const DEFAULT_WAIT_SECS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "shelter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse adoptable pets, offline first")]
#[command(
    long_about = "Browse adoptable pets, offline first.\n\n\
    Listings are served from a local cache right away and refreshed from the shelter in the background."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List pets of one type: cached first, then refreshed
    List {
        /// Pet type (cat, dog, rabbit, small_mammal, reptile)
        pet_type: PetType,

        /// Sort order (name, id); defaults to the configured order
        #[arg(long, value_name = "order")]
        order: Option<OrderBy>,

        /// How long to wait for the refreshed listing
        #[arg(long, value_name = "secs", default_value_t = DEFAULT_WAIT_SECS)]
        wait_secs: u64,
    },

    /// Show one pet's details
    Show {
        /// Pet type (cat, dog, rabbit, small_mammal, reptile)
        pet_type: PetType,

        /// Shelter id of the pet
        id: i64,

        /// Picture to select (0 is the main picture)
        #[arg(long, value_name = "index")]
        picture: Option<usize>,

        /// How long to wait for the details
        #[arg(long, value_name = "secs", default_value_t = DEFAULT_WAIT_SECS)]
        wait_secs: u64,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
