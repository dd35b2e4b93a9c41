// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of listings and details.

use chrono::{DateTime, Utc};
use shelter_core::{Pet, PetDetails, PetType};

use crate::colors;

/// Plural, human-facing name of a pet type.
pub fn type_label(pet_type: PetType) -> &'static str {
    match pet_type {
        PetType::Cat => "Cats",
        PetType::Dog => "Dogs",
        PetType::Rabbit => "Rabbits",
        PetType::SmallMammal => "Small mammals",
        PetType::Reptile => "Reptiles",
    }
}

fn status_flags(in_foster_care: bool, adoption_pending: bool) -> Option<String> {
    let flags: Vec<&str> = [
        (in_foster_care, "foster care"),
        (adoption_pending, "adoption pending"),
    ]
    .into_iter()
    .filter_map(|(set, label)| set.then_some(label))
    .collect();

    if flags.is_empty() {
        None
    } else {
        Some(format!("[{}]", flags.join(", ")))
    }
}

/// Format one listing row.
pub fn format_pet_row(pet: &Pet, colorize: bool) -> String {
    let row = format!(
        "{:>6}  {:<16} {:<7} {:<22} {}",
        pet.id, pet.name, pet.sex, pet.breed, pet.age
    );
    let mut row = row.trim_end().to_string();

    if let Some(flags) = status_flags(pet.in_foster_care, pet.adoption_pending) {
        row.push_str("  ");
        if colorize {
            row.push_str(&colors::flag(&flags));
        } else {
            row.push_str(&flags);
        }
    }
    row
}

/// Format a whole listing under a heading such as `cached` or `updated`.
pub fn format_listing(pet_type: PetType, heading: &str, pets: &[Pet], colorize: bool) -> String {
    let title = format!("{} ({}, {}):", type_label(pet_type), heading, pets.len());
    let mut out = if colorize {
        colors::header(&title)
    } else {
        title
    };
    out.push('\n');

    if pets.is_empty() {
        out.push_str(&format!(
            "  No {} to show.\n",
            type_label(pet_type).to_lowercase()
        ));
        return out;
    }
    for pet in pets {
        out.push_str(&format_pet_row(pet, colorize));
        out.push('\n');
    }
    out
}

/// One-line note on when a cached listing was last refreshed.
pub fn format_sync_note(last_synced: Option<DateTime<Utc>>, colorize: bool) -> String {
    let note = match last_synced {
        Some(at) => format!("last synced {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => "never synced".to_string(),
    };
    if colorize {
        format!("  {}\n", colors::context(&note))
    } else {
        format!("  {}\n", note)
    }
}

/// Format a pet's details and the picture at `selected`.
pub fn format_details(details: &PetDetails, selected: Option<usize>, colorize: bool) -> String {
    let label = |text: &str| {
        let text = format!("{text:<10}");
        if colorize {
            colors::context(&text)
        } else {
            text
        }
    };

    let title = format!("{} (#{})", details.name, details.id);
    let mut out = if colorize {
        colors::header(&title)
    } else {
        title
    };
    out.push('\n');

    let fields = [
        ("Sex", details.sex.as_deref()),
        ("Breed", details.breed.as_deref()),
        ("Age", details.age.as_deref()),
        ("Size", details.size.as_deref()),
        ("Color", details.color.as_deref()),
    ];
    for (name, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            out.push_str(&format!("  {}{}\n", label(name), value));
        }
    }
    if let Some(altered) = details.altered {
        let value = if altered { "yes" } else { "no" };
        out.push_str(&format!("  {}{}\n", label("Altered"), value));
    }
    if details.declawed {
        out.push_str(&format!("  {}yes\n", label("Declawed")));
    }
    if let Some(flags) = status_flags(details.in_foster_care, details.adoption_pending) {
        out.push_str(&format!("  {}{}\n", label("Status"), flags));
    }

    if !details.description.is_empty() {
        out.push('\n');
        for line in details.description.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out.push('\n');
    match selected.and_then(|index| Some((index, details.picture(index)?))) {
        Some((index, url)) => {
            out.push_str(&format!(
                "  {}{} ({} of {})\n",
                label("Picture"),
                url,
                index + 1,
                details.pic_urls.len()
            ));
        }
        None => out.push_str(&format!("  {}none\n", label("Picture"))),
    }
    if let Some(video) = &details.video_url {
        out.push_str(&format!("  {}{}\n", label("Video"), video));
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
