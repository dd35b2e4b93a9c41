// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core pet types for the shelter listing.
//!
//! This module contains the fundamental data types: PetType, Pet and
//! PetDetails. Values are immutable once built; a sync replaces them
//! wholesale rather than patching fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of pets. Every cache query and remote fetch is scoped to
/// exactly one pet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Cat,
    Dog,
    Rabbit,
    /// Guinea pigs, hamsters, rats and the like.
    SmallMammal,
    Reptile,
}

impl PetType {
    /// Every pet type, in display order.
    pub const ALL: [PetType; 5] = [
        PetType::Cat,
        PetType::Dog,
        PetType::Rabbit,
        PetType::SmallMammal,
        PetType::Reptile,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Cat => "cat",
            PetType::Dog => "dog",
            PetType::Rabbit => "rabbit",
            PetType::SmallMammal => "small_mammal",
            PetType::Reptile => "reptile",
        }
    }

    /// Returns the collection path segment used by the remote API.
    pub fn path(&self) -> &'static str {
        match self {
            PetType::Cat => "cats",
            PetType::Dog => "dogs",
            PetType::Rabbit => "rabbits",
            PetType::SmallMammal => "smallmammals",
            PetType::Reptile => "reptiles",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PetType {
    type Err = Error;

    /// Accepts the storage name, the remote path segment, and a few spellings
    /// people actually type (`small-mammal`, `SmallMammal`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "cat" | "cats" => Ok(PetType::Cat),
            "dog" | "dogs" => Ok(PetType::Dog),
            "rabbit" | "rabbits" => Ok(PetType::Rabbit),
            "small_mammal" | "small_mammals" | "smallmammal" | "smallmammals" => {
                Ok(PetType::SmallMammal)
            }
            "reptile" | "reptiles" => Ok(PetType::Reptile),
            _ => Err(Error::InvalidPetType(s.to_string())),
        }
    }
}

/// A pet as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Shelter identifier, unique within a pet type.
    pub id: i64,
    pub pet_type: PetType,
    pub name: String,
    /// Thumbnail picture.
    pub pic_url: String,
    pub sex: String,
    pub breed: String,
    pub age: String,
    /// Currently living with a foster family rather than at the shelter.
    pub in_foster_care: bool,
    /// An adoption application has been accepted but not finalized.
    pub adoption_pending: bool,
}

impl Pet {
    /// Creates a pet with the given identity and empty descriptive fields.
    pub fn new(id: i64, pet_type: PetType, name: impl Into<String>) -> Self {
        Pet {
            id,
            pet_type,
            name: name.into(),
            pic_url: String::new(),
            sex: String::new(),
            breed: String::new(),
            age: String::new(),
            in_foster_care: false,
            adoption_pending: false,
        }
    }
}

/// Full description of a single pet, fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDetails {
    pub id: i64,
    pub pet_type: PetType,
    pub name: String,
    /// Ordered picture URLs; index 0 is the main picture.
    pub pic_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Spayed or neutered. Unknown for some intake records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altered: Option<bool>,
    #[serde(default)]
    pub declawed: bool,
    #[serde(default)]
    pub in_foster_care: bool,
    #[serde(default)]
    pub adoption_pending: bool,
}

impl PetDetails {
    /// Returns the picture at `index`, if there is one.
    pub fn picture(&self, index: usize) -> Option<&str> {
        self.pic_urls.get(index).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "pet_tests.rs"]
mod tests;
