//! Normalize and sanitize command handlers

use std::path::Path;

use anyhow::{Context, Result};

use drillcraft::extract::parse_lenient;
use drillcraft::{sanitize, try_normalize_drill};

use super::{print_json, read_input};

/// Normalize one raw drill document. Fails when it is not drill-shaped.
#[cfg(not(tarpaulin_include))]
pub fn handle_normalize(file: Option<&Path>, pretty: bool) -> Result<()> {
    let raw = read_input(file)?;
    let value = parse_lenient(&raw).context("Input is not valid JSON after sanitizing")?;
    let drill = try_normalize_drill(&value).map_err(|e| anyhow::anyhow!("Not a drill: {}", e))?;
    print_json(&drill, pretty)
}

/// Print the sanitized input.
#[cfg(not(tarpaulin_include))]
pub fn handle_sanitize(file: Option<&Path>) -> Result<()> {
    let raw = read_input(file)?;
    print!("{}", sanitize(&raw));
    Ok(())
}
