//! delete command - Remove a stored line
//!
//! The document is deleted only if it is unchanged since it was loaded.

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::lock::LineLock;
use crate::core::types::LineName;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct DeleteReport<'a> {
    deleted: &'a LineName,
}

/// Delete `line`.
pub fn delete(ctx: &Context, line: &LineName) -> Result<()> {
    let store = ctx.store();
    let _lock = LineLock::acquire(store.paths(), line).context("Failed to lock line")?;

    let loaded = store
        .load(line)
        .with_context(|| format!("Failed to load line '{}'", line))?;
    store
        .delete_cas(line, &loaded.fingerprint)
        .with_context(|| format!("Failed to delete line '{}'", line))?;

    if ctx.json {
        output::json(&DeleteReport { deleted: line })?;
    } else {
        ctx.say(format!("Deleted line '{}'", line));
    }
    Ok(())
}
