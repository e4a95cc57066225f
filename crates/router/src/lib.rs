//! # nadir-router
//!
//! Explicit routing for web and command-line requests.
//!
//! - [`RouteMap`]: configuration mapping method + path regex (or a CLI
//!   route name) to a `[controller, action]` pair
//! - [`HandlerRegistry`]: the actions those pairs name, registered at startup
//! - [`AuthGate`] and [`guarded`]: authorization as a handler decorator
//! - [`FrontController`]: resolves a [`Request`] and runs the action
//!
//! ```
//! use nadir_router::{CliRequest, FrontController, HandlerRegistry, Request, Response, RouteMap};
//!
//! let routes = RouteMap::from_toml_str(r#"
//!     [get."/hello/(\\w+)"]
//!     ctrl = ["Greeter", "hello"]
//!
//!     [cli.hello]
//!     ctrl = ["Greeter", "hello"]
//! "#)?;
//!
//! let mut handlers = HandlerRegistry::new();
//! handlers.register_fn("Greeter", "hello", |call| {
//!     Ok(Response::ok(format!("Hello, {}!", call.args.join(" "))))
//! });
//!
//! let front = FrontController::new(&routes, handlers)?;
//! let response = front.dispatch(&Request::Cli(CliRequest::new(["app", "hello", "Ada"])))?;
//! assert_eq!(response.body, "Hello, Ada!");
//! # Ok::<(), nadir_router::RouterError>(())
//! ```

pub mod controller;
pub mod error;
pub mod handler;
pub mod request;
pub mod route;

pub use controller::FrontController;
pub use error::{HandlerError, RouterError, RouterResult};
pub use handler::{ActionCall, AuthGate, FnHandler, Handler, HandlerRegistry, guarded, handler_fn};
pub use request::{CliRequest, Request, Response, WebRequest};
pub use route::{CLI_SECTION, CompiledRoutes, Resolved, RouteConfig, RouteMap};
