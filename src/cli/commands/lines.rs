//! lines command - List stored lines

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::LineName;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct LinesReport<'a> {
    lines: &'a [LineName],
}

/// List every stored line, sorted by name.
pub fn lines(ctx: &Context) -> Result<()> {
    let names = ctx.store().list().context("Failed to list lines")?;

    if ctx.json {
        output::json(&LinesReport { lines: &names })?;
    } else if names.is_empty() {
        ctx.say("No lines. Create one with 'subway create'.");
    } else {
        println!("{}", output::format_list(&names, ""));
    }
    Ok(())
}
