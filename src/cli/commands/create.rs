//! create command - Start a new line from its first section

use anyhow::{bail, Context as _, Result};

use super::report_line;
use crate::cli::Context;
use crate::core::lock::LineLock;
use crate::core::path::LinePath;
use crate::core::types::{Distance, LineName, StationId};

/// Create `line` holding the single section `up -> down`.
///
/// Fails if the line already exists.
pub fn create(
    ctx: &Context,
    line: &LineName,
    up: StationId,
    down: StationId,
    distance: Distance,
) -> Result<()> {
    let store = ctx.store();
    let _lock = LineLock::acquire(store.paths(), line).context("Failed to lock line")?;

    if store.exists(line) {
        bail!("Line '{}' already exists. Use 'subway add' to extend it.", line);
    }

    let mut path = LinePath::new();
    path.insert(up, down, distance)
        .context("Invalid first section")?;

    let fingerprint = store
        .create(line, &path)
        .with_context(|| format!("Failed to create line '{}'", line))?;

    report_line(ctx, line, &path, &fingerprint, format!("Created line '{}'", line))
}
