use std::path::PathBuf;

use clap::Args;
use nadir_dump::Dump;

use super::read_json;

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// JSON file to dump (`-` for stdin)
    pub file: PathBuf,

    /// Levels to expand; defaults to `dump.depth` from config
    #[arg(long)]
    pub depth: Option<usize>,
}

pub fn run(args: &DumpArgs, default_depth: usize) -> anyhow::Result<String> {
    let value = read_json(&args.file)?;
    let depth = args.depth.unwrap_or(default_depth);
    Ok(Dump::new(&value).depth(depth).to_string())
}
