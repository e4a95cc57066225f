//! Route maps
//!
//! A route map is configuration: one section per lower-case HTTP method,
//! keyed by path regex, plus a `cli` section keyed by exact route name.
//!
//! ```toml
//! [get."/users/(\\d+)"]
//! ctrl = ["Users", "show"]
//!
//! [cli.migrate]
//! ctrl = ["Db", "migrate"]
//! ```
//!
//! Section and route order is preserved; the first matching route wins.

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RouterError, RouterResult};

/// Name of the CLI section.
pub const CLI_SECTION: &str = "cli";

/// Configuration of one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// `[controller, action]`
    pub ctrl: (String, String),
    /// Whether the auth gate guards the action. Unset means the section
    /// default: guarded for web, open for CLI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<bool>,
    /// Every other key of the route entry, passed through to the handler.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouteConfig {
    /// Creates a route to `controller::action`.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            ctrl: (controller.into(), action.into()),
            auth: None,
            extra: Map::new(),
        }
    }

    /// Sets the auth flag.
    #[must_use]
    pub fn with_auth(mut self, auth: bool) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Controller name.
    #[must_use]
    pub fn controller(&self) -> &str {
        &self.ctrl.0
    }

    /// Action name.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.ctrl.1
    }
}

/// The whole route table, section by section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteMap {
    sections: IndexMap<String, IndexMap<String, RouteConfig>>,
}

impl RouteMap {
    /// Creates an empty route map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML route map.
    ///
    /// # Errors
    ///
    /// [`RouterError::Toml`] if the document does not describe a route map.
    pub fn from_toml_str(source: &str) -> RouterResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parses a JSON route map.
    ///
    /// # Errors
    ///
    /// [`RouterError::Json`] if the document does not describe a route map.
    pub fn from_json_str(source: &str) -> RouterResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Adds a web route under `method`.
    pub fn web(&mut self, method: &str, pattern: impl Into<String>, config: RouteConfig) -> &mut Self {
        self.insert(&method.to_lowercase(), pattern, config)
    }

    /// Adds a CLI route.
    pub fn cli(&mut self, route: impl Into<String>, config: RouteConfig) -> &mut Self {
        self.insert(CLI_SECTION, route, config)
    }

    fn insert(&mut self, section: &str, route: impl Into<String>, config: RouteConfig) -> &mut Self {
        self.sections
            .entry(section.to_owned())
            .or_default()
            .insert(route.into(), config);
        self
    }

    /// Routes of one section, in declaration order.
    pub fn section(&self, name: &str) -> impl Iterator<Item = (&str, &RouteConfig)> {
        self.sections
            .get(name)
            .into_iter()
            .flat_map(|routes| routes.iter().map(|(route, config)| (route.as_str(), config)))
    }

    /// Section names, in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Total number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(IndexMap::len).sum()
    }

    /// Returns true if there are no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A route picked for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    /// The matching route's configuration.
    pub config: &'a RouteConfig,
    /// Positional action arguments.
    pub args: Vec<String>,
    /// Whether the auth gate applies.
    pub auth: bool,
}

#[derive(Debug)]
struct WebRoute {
    regex: Regex,
    config: RouteConfig,
}

/// A route map with every web pattern compiled.
#[derive(Debug)]
pub struct CompiledRoutes {
    web: IndexMap<String, Vec<WebRoute>>,
    cli: IndexMap<String, RouteConfig>,
}

impl CompiledRoutes {
    /// Compiles every web pattern as `^<pattern>/?$`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidPattern`] for the first pattern that does not compile.
    pub fn compile(map: &RouteMap) -> RouterResult<Self> {
        let mut web: IndexMap<String, Vec<WebRoute>> = IndexMap::new();
        let mut cli = IndexMap::new();

        for (section, routes) in &map.sections {
            let method = section.to_lowercase();
            if method == CLI_SECTION {
                cli.extend(routes.iter().map(|(r, c)| (r.clone(), c.clone())));
                continue;
            }
            let compiled = web.entry(method.clone()).or_default();
            for (pattern, config) in routes {
                let regex = Regex::new(&format!("^(?:{pattern})/?$")).map_err(|source| {
                    RouterError::InvalidPattern {
                        method: method.clone(),
                        pattern: pattern.clone(),
                        source,
                    }
                })?;
                compiled.push(WebRoute {
                    regex,
                    config: config.clone(),
                });
            }
        }

        tracing::debug!(
            web = web.values().map(Vec::len).sum::<usize>(),
            cli = cli.len(),
            "routes compiled"
        );
        Ok(Self { web, cli })
    }

    /// Finds the first web route matching `method` and the decoded `path`.
    ///
    /// Capture groups become the action arguments; a group that did not
    /// participate yields an empty string.
    ///
    /// # Errors
    ///
    /// [`RouterError::NoRoute`] if nothing matches.
    pub fn resolve_web(&self, method: &str, path: &str) -> RouterResult<Resolved<'_>> {
        let method = method.to_lowercase();
        let decoded = decode_path(path);

        let found = self.web.get(&method).and_then(|routes| {
            routes.iter().find_map(|route| {
                route.regex.captures(&decoded).map(|caps| Resolved {
                    config: &route.config,
                    args: caps
                        .iter()
                        .skip(1)
                        .map(|m| m.map_or_else(String::new, |m| m.as_str().to_owned()))
                        .collect(),
                    auth: route.config.auth.unwrap_or(true),
                })
            })
        });

        found.ok_or(RouterError::NoRoute {
            section: method,
            route: decoded,
        })
    }

    /// Finds the CLI route named by `args[1]`; `args[2..]` are the action
    /// arguments.
    ///
    /// # Errors
    ///
    /// [`RouterError::MissingCliRoute`] if `args` has no route,
    /// [`RouterError::NoRoute`] if the route is unknown.
    pub fn resolve_cli(&self, args: &[String]) -> RouterResult<Resolved<'_>> {
        let route = args.get(1).ok_or(RouterError::MissingCliRoute)?;
        let config = self.cli.get(route).ok_or_else(|| RouterError::NoRoute {
            section: CLI_SECTION.to_owned(),
            route: route.clone(),
        })?;

        Ok(Resolved {
            config,
            args: args[2..].to_vec(),
            auth: config.auth.unwrap_or(false),
        })
    }
}

/// URL-decodes a path: `+` is a space, `%XX` an escaped byte.
fn decode_path(path: &str) -> String {
    percent_decode_str(&path.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ROUTES: &str = r#"
        [get."/"]
        ctrl = ["Home", "index"]

        [get."/users/(\\d+)"]
        ctrl = ["Users", "show"]
        layout = "main"

        [get."/files/(.+)"]
        ctrl = ["Files", "show"]
        auth = false

        [post."/users"]
        ctrl = ["Users", "create"]

        [cli.migrate]
        ctrl = ["Db", "migrate"]
    "#;

    fn compiled() -> CompiledRoutes {
        CompiledRoutes::compile(&RouteMap::from_toml_str(ROUTES).unwrap()).unwrap()
    }

    #[test]
    fn toml_keeps_declaration_order() {
        let map = RouteMap::from_toml_str(ROUTES).unwrap();
        assert_eq!(map.sections().collect::<Vec<_>>(), ["get", "post", "cli"]);
        let routes: Vec<_> = map.section("get").map(|(route, _)| route).collect();
        assert_eq!(routes, ["/", "/users/(\\d+)", "/files/(.+)"]);
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn extra_keys_are_kept() {
        let map = RouteMap::from_toml_str(ROUTES).unwrap();
        let (_, config) = map.section("get").nth(1).unwrap();
        assert_eq!(config.extra.get("layout"), Some(&Value::from("main")));
    }

    #[test]
    fn json_route_map() {
        let map = RouteMap::from_json_str(r#"{"get": {"/ping": {"ctrl": ["Health", "ping"]}}}"#).unwrap();
        let (route, config) = map.section("get").next().unwrap();
        assert_eq!(route, "/ping");
        assert_eq!(config.controller(), "Health");
        assert_eq!(config.action(), "ping");
    }

    #[rstest]
    #[case("GET", "/", "index", &[])]
    #[case("get", "/users/42", "show", &["42"])]
    #[case("GET", "/users/42/", "show", &["42"])]
    #[case("GET", "/files/a%20b.txt", "show", &["a b.txt"])]
    #[case("GET", "/files/x+y", "show", &["x y"])]
    #[case("POST", "/users", "create", &[])]
    fn web_routes_match(
        #[case] method: &str,
        #[case] path: &str,
        #[case] action: &str,
        #[case] args: &[&str],
    ) {
        let routes = compiled();
        let resolved = routes.resolve_web(method, path).unwrap();
        assert_eq!(resolved.config.action(), action);
        assert_eq!(resolved.args, args);
    }

    #[rstest]
    #[case("GET", "/users/abc")]
    #[case("GET", "/users/42/edit")]
    #[case("DELETE", "/users")]
    fn unmatched_web_route(#[case] method: &str, #[case] path: &str) {
        assert!(matches!(
            compiled().resolve_web(method, path),
            Err(RouterError::NoRoute { .. })
        ));
    }

    #[test]
    fn web_auth_defaults_on() {
        let routes = compiled();
        assert!(routes.resolve_web("GET", "/users/1").unwrap().auth);
        assert!(!routes.resolve_web("GET", "/files/a").unwrap().auth);
    }

    #[test]
    fn cli_route_and_args() {
        let routes = compiled();
        let args: Vec<String> = ["bin", "migrate", "up", "3"].map(String::from).to_vec();
        let resolved = routes.resolve_cli(&args).unwrap();
        assert_eq!(resolved.config.controller(), "Db");
        assert_eq!(resolved.args, ["up", "3"]);
        assert!(!resolved.auth);
    }

    #[test]
    fn cli_route_is_exact() {
        let args: Vec<String> = ["bin", "migr"].map(String::from).to_vec();
        assert!(matches!(
            compiled().resolve_cli(&args),
            Err(RouterError::NoRoute { .. })
        ));
    }

    #[test]
    fn cli_without_route() {
        let args = vec!["bin".to_owned()];
        assert!(matches!(
            compiled().resolve_cli(&args),
            Err(RouterError::MissingCliRoute)
        ));
    }

    #[test]
    fn invalid_pattern_is_reported_at_compile() {
        let mut map = RouteMap::new();
        map.web("GET", "/broken/(", RouteConfig::new("A", "b"));
        assert!(matches!(
            CompiledRoutes::compile(&map),
            Err(RouterError::InvalidPattern { pattern, .. }) if pattern == "/broken/("
        ));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let mut map = RouteMap::new();
        map.web("GET", "/a|/b", RouteConfig::new("A", "b"));
        let routes = CompiledRoutes::compile(&map).unwrap();
        assert!(routes.resolve_web("GET", "/b").is_ok());
        assert!(routes.resolve_web("GET", "/a/extra").is_err());
    }
}
