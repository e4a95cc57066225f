use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use nadir_validator::Validator;

use super::read_json;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// JSON data tree to validate (`-` for stdin)
    #[arg(short, long)]
    pub data: PathBuf,

    /// JSON array of `[fields, rule, options]` items
    #[arg(short, long)]
    pub rules: PathBuf,
}

/// Returns the validation messages; empty means valid.
pub fn run(args: &ValidateArgs) -> anyhow::Result<Vec<String>> {
    let tree = read_json(&args.data)?;
    let items = read_json(&args.rules)?;

    let mut validator = Validator::new(tree);
    validator
        .set_raw_items(&items)
        .with_context(|| format!("invalid rules in {}", args.rules.display()))?;
    validator.run()?;

    let errors = validator.into_errors()?;
    tracing::info!(errors = errors.len(), "validation complete");
    Ok(errors)
}
