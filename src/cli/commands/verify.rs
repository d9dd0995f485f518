//! verify command - Check a stored line's invariants
//!
//! Parses the document without structural validation rather than going
//! through [`LineStore::load`], which would refuse a broken line before it
//! could be diagnosed.
//!
//! [`LineStore::load`]: crate::core::document::LineStore::load

use std::fs;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::document::{parse_document_unchecked, StoreError};
use crate::core::paths::StorePaths;
use crate::core::types::LineName;
use crate::core::verify::verify_sections;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct VerifyReport<'a> {
    line: &'a LineName,
    ok: bool,
    sections: usize,
    errors: Vec<String>,
}

/// Verify `line`, failing if any invariant is violated.
pub fn verify(ctx: &Context, line: &LineName) -> Result<()> {
    let file = StorePaths::new(ctx.data_dir.clone()).line_path(line);
    if !file.exists() {
        return Err(StoreError::NotFound(line.to_string()).into());
    }

    let contents =
        fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    let document = match parse_document_unchecked(&contents) {
        Ok(document) => document,
        Err(err) => bail!("Line '{}' failed verification: {}", line, err),
    };

    let result = verify_sections(&document.sections);
    tracing::debug!(line = %line, ok = result.ok, errors = result.errors.len(), "verified line");

    if ctx.json {
        output::json(&VerifyReport {
            line,
            ok: result.ok,
            sections: document.sections.len(),
            errors: result.errors.iter().map(ToString::to_string).collect(),
        })?;
    } else if result.ok {
        ctx.say(format!(
            "Line '{}' is valid ({} sections)",
            line,
            document.sections.len()
        ));
    } else {
        for error in &result.errors {
            output::error(error);
        }
    }

    if !result.ok {
        bail!(
            "Line '{}' failed verification with {} error(s)",
            line,
            result.errors.len()
        );
    }
    Ok(())
}
