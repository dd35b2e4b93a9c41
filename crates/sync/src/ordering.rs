// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Display ordering of pet listings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use shelter_core::Pet;

use crate::error::{Error, Result};

type SortFn = Arc<dyn Fn(&mut [Pet]) + Send + Sync>;

/// Ordering applied to every listing before it is published.
///
/// Sorting is stable and ties are broken by id, so equal keys always come
/// out in the same order. Keys are computed once per pet per sort.
#[derive(Clone)]
pub struct PetOrdering {
    label: &'static str,
    sort: SortFn,
}

impl PetOrdering {
    /// Order by an arbitrary key.
    pub fn by_key<K, F>(label: &'static str, key: F) -> Self
    where
        K: Ord,
        F: Fn(&Pet) -> K + Send + Sync + 'static,
    {
        PetOrdering {
            label,
            sort: Arc::new(move |pets: &mut [Pet]| {
                pets.sort_by_cached_key(|pet| (key(pet), pet.id))
            }),
        }
    }

    /// Case-insensitive by name.
    pub fn by_name() -> Self {
        Self::by_key("name", |pet| pet.name.to_lowercase())
    }

    /// By shelter id.
    pub fn by_id() -> Self {
        Self::by_key("id", |pet| pet.id)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Sort `pets` in place.
    pub fn sort(&self, pets: &mut [Pet]) {
        (self.sort)(pets)
    }
}

impl Default for PetOrdering {
    fn default() -> Self {
        Self::by_name()
    }
}

impl fmt::Debug for PetOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PetOrdering").field(&self.label).finish()
    }
}

/// Named orderings selectable from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    #[default]
    Name,
    Id,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Name => "name",
            OrderBy::Id => "id",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(OrderBy::Name),
            "id" => Ok(OrderBy::Id),
            _ => Err(Error::Config(format!(
                "invalid order '{s}'\n  hint: valid orders are: name, id"
            ))),
        }
    }
}

impl From<OrderBy> for PetOrdering {
    fn from(order: OrderBy) -> Self {
        match order {
            OrderBy::Name => PetOrdering::by_name(),
            OrderBy::Id => PetOrdering::by_id(),
        }
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
