//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each mutating handler follows the same lifecycle:
//! 1. Acquire the line lock
//! 2. Load the line and remember its fingerprint
//! 3. Apply the edit through [`LinePath`]
//! 4. Save with compare-and-swap against the remembered fingerprint
//!
//! Edits that fail leave the stored line untouched. Read-only handlers skip
//! the lock and simply load.

mod add;
mod completion;
mod create;
mod delete;
mod lines;
mod remove;
mod show;
mod verify;

pub use add::add;
pub use completion::completion;
pub use create::create;
pub use delete::delete;
pub use lines::lines;
pub use remove::remove;
pub use show::{sections, stations};
pub use verify::verify;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::args::Command;
use super::Context;
use crate::core::lock::LineLock;
use crate::core::path::LinePath;
use crate::core::types::{Fingerprint, LineName, StationId};
use crate::ui::output;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Create {
            line,
            up,
            down,
            distance,
        } => create(ctx, &line, up, down, distance),
        Command::Add {
            line,
            up,
            down,
            distance,
        } => add(ctx, &line, up, down, distance),
        Command::Remove {
            line,
            station,
            terminal,
        } => remove(ctx, &line, &station, terminal),
        Command::Stations { line } => stations(ctx, &line),
        Command::Sections { line } => sections(ctx, &line),
        Command::Verify { line } => verify(ctx, &line),
        Command::Lines => lines(ctx),
        Command::Delete { line } => delete(ctx, &line),
        Command::Completion { shell } => completion(shell),
    }
}

/// Lock, load, edit and save a line.
///
/// `edit` runs against the loaded path; if it fails nothing is written.
/// Returns the saved path and its new fingerprint.
pub(crate) fn edit_line<F>(
    ctx: &Context,
    line: &LineName,
    edit: F,
) -> Result<(LinePath, Fingerprint)>
where
    F: FnOnce(&mut LinePath) -> Result<()>,
{
    let store = ctx.store();
    let _lock = LineLock::acquire(store.paths(), line).context("Failed to lock line")?;

    let mut loaded = store
        .load(line)
        .with_context(|| format!("Failed to load line '{}'", line))?;

    edit(&mut loaded.path)?;

    let fingerprint = store
        .save_cas(line, &loaded.fingerprint, &loaded.path)
        .with_context(|| format!("Failed to save line '{}'", line))?;

    Ok((loaded.path, fingerprint))
}

/// JSON shape reported after a line is created or edited.
#[derive(Debug, Serialize)]
pub(crate) struct LineReport<'a> {
    pub line: &'a LineName,
    pub stations: Vec<&'a StationId>,
    pub total_distance: u64,
    pub fingerprint: &'a Fingerprint,
}

/// Report the state of a line after an edit.
///
/// Text mode prints `message` followed by the station order.
pub(crate) fn report_line(
    ctx: &Context,
    line: &LineName,
    path: &LinePath,
    fingerprint: &Fingerprint,
    message: impl std::fmt::Display,
) -> Result<()> {
    let stations: Vec<&StationId> = path
        .stations()
        .context("Line is no longer a single path")?
        .collect();

    if ctx.json {
        output::json(&LineReport {
            line,
            stations,
            total_distance: path.total_distance(),
            fingerprint,
        })?;
    } else {
        ctx.say(message);
        ctx.say(format!("  {}", output::format_stations(&stations)));
    }
    Ok(())
}
