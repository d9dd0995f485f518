//! add command - Insert a section into an existing line
//!
//! The section either extends the line past a terminal station or splits an
//! existing section. See [`LinePath::insert`] for the rules.

use anyhow::{Context as _, Result};

use super::{edit_line, report_line};
use crate::cli::Context;
use crate::core::path::LinePath;
use crate::core::section::Section;
use crate::core::types::{Distance, LineName, StationId};

/// Add the section `up -> down` to `line`.
pub fn add(
    ctx: &Context,
    line: &LineName,
    up: StationId,
    down: StationId,
    distance: Distance,
) -> Result<()> {
    let section = Section::new(up, down, distance);
    let message = format!("Added {} to line '{}'", section, line);

    let (path, fingerprint) = edit_line(ctx, line, |path: &mut LinePath| {
        let (up, down, distance) = section.into_parts();
        path.insert(up, down, distance)
            .context("Cannot add section")?;
        Ok(())
    })?;

    report_line(ctx, line, &path, &fingerprint, message)
}
