//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON on stdout.

use std::fmt::Display;

use serde::Serialize;

use crate::core::section::Section;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a value as pretty JSON (always shown; JSON is the requested data).
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format stations in head-to-tail order.
///
/// # Example
///
/// ```
/// use subwayline::ui::output::format_stations;
///
/// assert_eq!(format_stations(&["A", "B", "C"]), "A -> B -> C");
/// assert_eq!(format_stations::<&str>(&[]), "");
/// ```
pub fn format_stations<T: Display>(stations: &[T]) -> String {
    stations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format sections one per line, padded so distances line up.
pub fn format_sections<S: Display + Eq>(sections: &[Section<S>]) -> String {
    let rows: Vec<(String, String, u32)> = sections
        .iter()
        .map(|s| (s.up().to_string(), s.down().to_string(), s.distance().get()))
        .collect();

    let up_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0);
    let down_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|(up, down, distance)| {
            format!(
                "{:<up_width$} -> {:<down_width$}  {}",
                up, down, distance
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
