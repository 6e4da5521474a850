//! Command handlers for the `senum` CLI.
//!
//! Each handler returns the lines to print so the output can be checked
//! without running the binary.

use anyhow::Result;
use tracing::debug;

use crate::demo::{DemoEntry, REGISTRY};

/// Describe every demo catalog.
pub fn list_enums() -> Vec<String> {
    REGISTRY
        .iter()
        .map(|entry| {
            format!(
                "{}: {} ({})",
                entry.key,
                entry.display,
                entry.inspect.kind()
            )
        })
        .collect()
}

/// List the instances of one catalog as `name = value`.
pub fn list(entry: &DemoEntry) -> Result<Vec<String>> {
    debug!(catalog = entry.key, "listing");
    Ok(entry
        .inspect
        .entries()?
        .into_iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect())
}

/// Resolve a name, or a comma-separated name list for flag catalogs.
pub fn name(entry: &DemoEntry, names: &str, ignore_case: bool) -> Result<String> {
    debug!(catalog = entry.key, names, ignore_case, "resolving names");
    entry.inspect.by_names(names, ignore_case)
}

/// Resolve a value; flag catalogs print the decomposition.
pub fn value(entry: &DemoEntry, raw: &str) -> Result<String> {
    debug!(catalog = entry.key, raw, "resolving value");
    entry.inspect.by_value(raw)
}
