use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};
use nadir_router::{CliRequest, CompiledRoutes, Request, RouteMap, WebRequest};
use serde_json::{Value, json};

#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Route map (TOML or JSON); defaults to `routes` from config
    #[arg(long)]
    pub routes: Option<PathBuf>,

    #[command(subcommand)]
    pub target: RouteTarget,
}

#[derive(Debug, Subcommand)]
pub enum RouteTarget {
    /// Resolve a web request
    Web {
        /// HTTP method
        method: String,
        /// Request URI, query string allowed
        uri: String,
    },
    /// Resolve a CLI route
    Cli {
        /// Route name
        route: String,
        /// Action arguments
        args: Vec<String>,
    },
}

fn load_routes(path: &Path) -> anyhow::Result<RouteMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let map = if path.extension().is_some_and(|ext| ext == "json") {
        RouteMap::from_json_str(&text)
    } else {
        RouteMap::from_toml_str(&text)
    };
    map.with_context(|| format!("invalid route map {}", path.display()))
}

/// Resolves the target and describes the match as JSON.
pub fn run(args: &RouteArgs, configured: Option<&Path>) -> anyhow::Result<Value> {
    let path = args
        .routes
        .as_deref()
        .or(configured)
        .context("no route map: pass --routes or set `routes` in the config")?;
    let routes = CompiledRoutes::compile(&load_routes(path)?)?;

    let request = match &args.target {
        RouteTarget::Web { method, uri } => Request::Web(WebRequest::new(method, uri)),
        RouteTarget::Cli { route, args } => Request::Cli(CliRequest::new(
            ["nadir".to_owned(), route.clone()]
                .into_iter()
                .chain(args.iter().cloned()),
        )),
    };

    let resolved = match &request {
        Request::Web(web) => routes.resolve_web(web.method(), web.url_path()),
        Request::Cli(cli) => routes.resolve_cli(cli.args()),
    }?;

    Ok(json!({
        "controller": resolved.config.controller(),
        "action": resolved.config.action(),
        "args": resolved.args,
        "auth": resolved.auth,
    }))
}
