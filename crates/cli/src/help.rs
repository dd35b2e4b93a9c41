// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Examples shown after the main help.
pub fn quickstart() -> String {
    let lines = [
        ("shelter list dogs", "Show cached dogs, then the refreshed list"),
        ("shelter list cats --order id", "Sort by shelter id instead of name"),
        ("shelter show rabbit 42", "Show one rabbit's details"),
        ("shelter show dog 7 --picture 2", "Pick the third picture"),
        ("shelter config init", "Write a default config file"),
    ];
    let colorize = colors::should_colorize();

    let mut text = if colorize {
        colors::header("Examples:")
    } else {
        "Examples:".to_string()
    };
    for (command, description) in lines {
        let command = format!("{command:<32}");
        let command = if colorize {
            colors::literal(&command)
        } else {
            command
        };
        text.push_str(&format!("\n  {command}{description}"));
    }
    text
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
