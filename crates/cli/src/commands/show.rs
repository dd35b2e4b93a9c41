// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use shelter_core::PetType;
use shelter_sync::{Config, DetailCoordinator, HttpPetsService};

use crate::colors;
use crate::display::format_details;
use crate::error::{Error, Result};

/// Fetch and print one pet's details, optionally selecting a picture.
pub async fn run(
    config: &Config,
    pet_type: PetType,
    id: i64,
    picture: Option<usize>,
    wait: Duration,
) -> Result<()> {
    let service = Arc::new(HttpPetsService::new(&config.remote)?);
    tracing::debug!(base_url = service.base_url(), "using pets service");
    let coordinator = DetailCoordinator::new(service, pet_type, id)?;

    let (_details_sub, mut loaded) = coordinator.details().subscribe_channel();
    let (_failure_sub, mut failures) = coordinator.errors().subscribe_channel();
    let what = format!("{} {}", pet_type, id);

    let details = tokio::select! {
        Some(details) = loaded.recv() => details,
        Some(failure) = failures.recv() => {
            return Err(Error::Remote { what, message: failure.message });
        }
        () = tokio::time::sleep(wait) => {
            return Err(Error::Timeout { what, secs: wait.as_secs() });
        }
    };

    if let Some(index) = picture {
        coordinator.select_picture(index);
        if coordinator.selected_index() != Some(index) {
            eprintln!(
                "warning: picture {} is out of range ({} available)",
                index,
                details.pic_urls.len()
            );
        }
    }

    print!(
        "{}",
        format_details(&details, coordinator.selected_index(), colors::should_colorize())
    );
    coordinator.dispose();
    Ok(())
}
