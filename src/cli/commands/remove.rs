//! remove command - Remove a station from a line
//!
//! Without `--terminal`, any station may go: inner stations are merged
//! around. With `--terminal`, only the head or tail is accepted.

use anyhow::{Context as _, Result};

use super::{edit_line, report_line};
use crate::cli::Context;
use crate::core::types::{LineName, StationId};

/// Remove `station` from `line`.
pub fn remove(ctx: &Context, line: &LineName, station: &StationId, terminal: bool) -> Result<()> {
    let (path, fingerprint) = edit_line(ctx, line, |path| {
        let result = if terminal {
            path.remove_terminal(station)
        } else {
            path.remove_station(station)
        };
        result.with_context(|| format!("Cannot remove station '{}'", station))
    })?;

    report_line(
        ctx,
        line,
        &path,
        &fingerprint,
        format!("Removed station '{}' from line '{}'", station, line),
    )
}
