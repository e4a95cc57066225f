//! Subcommand implementations.

pub mod dump;
pub mod route;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
