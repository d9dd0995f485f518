//! stations / sections commands - Read-only views of a line

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::section::Section;
use crate::core::types::{LineName, StationId};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct StationsReport<'a> {
    line: &'a LineName,
    stations: Vec<&'a StationId>,
}

#[derive(Debug, Serialize)]
struct SectionsReport<'a> {
    line: &'a LineName,
    sections: &'a [Section],
    total_distance: u64,
}

/// Print the stations of `line` from head to tail.
pub fn stations(ctx: &Context, line: &LineName) -> Result<()> {
    let loaded = ctx
        .store()
        .load(line)
        .with_context(|| format!("Failed to load line '{}'", line))?;

    let stations: Vec<&StationId> = loaded
        .path
        .stations()
        .context("Line is not a single path")?
        .collect();

    if ctx.json {
        output::json(&StationsReport { line, stations })?;
    } else {
        // Quiet mode still prints the data that was asked for.
        println!("{}", output::format_list(&stations, ""));
    }
    Ok(())
}

/// Print the sections of `line` in storage order.
pub fn sections(ctx: &Context, line: &LineName) -> Result<()> {
    let loaded = ctx
        .store()
        .load(line)
        .with_context(|| format!("Failed to load line '{}'", line))?;
    let path = &loaded.path;

    if ctx.json {
        output::json(&SectionsReport {
            line,
            sections: path.sections(),
            total_distance: path.total_distance(),
        })?;
    } else {
        println!("{}", output::format_sections(path.sections()));
        ctx.say(format!("total: {}", path.total_distance()));
    }
    Ok(())
}
