// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use shelter_core::{PetStore, PetType};
use shelter_sync::{Config, HttpPetsService, OrderBy, SyncCoordinator};

use crate::colors;
use crate::display::{format_listing, format_sync_note, type_label};
use crate::error::{Error, Result};

/// Print the cached listing, then the refreshed one once it lands.
///
/// A failed refresh is a warning, not an error: the cached listing still
/// counts as an answer.
pub async fn run(config: &Config, pet_type: PetType, order: OrderBy, wait: Duration) -> Result<()> {
    let db_path = config.db_path();
    tracing::debug!(path = %db_path.display(), "opening pet store");
    let store = PetStore::open(&db_path)?;
    let service = Arc::new(HttpPetsService::new(&config.remote)?);
    tracing::debug!(base_url = service.base_url(), "using pets service");
    let last_synced = store.last_synced(pet_type).await?;
    let coordinator = SyncCoordinator::with_ordering(store, service, order.into())?;

    let (_listing_sub, mut listings) = coordinator.observe().subscribe_channel();
    let (_failure_sub, mut failures) = coordinator.errors().subscribe_channel();
    coordinator.set_category(pet_type);

    let colorize = colors::should_colorize();
    let deadline = tokio::time::sleep(wait);
    tokio::pin!(deadline);

    let mut shown = 0;
    let mut failed = false;
    loop {
        tokio::select! {
            Some(pets) = listings.recv() => {
                let heading = if shown == 0 { "cached" } else { "updated" };
                print!("{}", format_listing(pet_type, heading, &pets, colorize));
                if shown == 0 {
                    print!("{}", format_sync_note(last_synced, colorize));
                }
                shown += 1;
                if shown >= 2 || failed {
                    break;
                }
            }
            Some(failure) = failures.recv() => {
                eprintln!(
                    "warning: could not refresh {}: {}",
                    type_label(pet_type).to_lowercase(),
                    failure.message
                );
                failed = true;
                if shown > 0 {
                    break;
                }
            }
            () = &mut deadline => {
                if shown == 0 {
                    return Err(Error::Timeout {
                        what: format!("cached {}", type_label(pet_type).to_lowercase()),
                        secs: wait.as_secs(),
                    });
                }
                if !failed {
                    eprintln!(
                        "warning: no refresh within {}s, showing cached {}",
                        wait.as_secs(),
                        type_label(pet_type).to_lowercase()
                    );
                }
                break;
            }
        }
    }

    coordinator.dispose();
    Ok(())
}
