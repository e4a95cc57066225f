//! Handlers, the handler registry and the auth gate
//!
//! Controllers are not looked up by name at request time. Every
//! `(controller, action)` pair a route map can name is registered up front
//! with the handler that serves it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::HandlerError;
use crate::request::{Request, Response};
use crate::route::RouteConfig;

/// Everything an action sees.
#[derive(Debug, Clone, Copy)]
pub struct ActionCall<'a> {
    /// The request being served.
    pub request: &'a Request,
    /// Configuration of the matched route.
    pub route: &'a RouteConfig,
    /// Positional arguments: regex captures for web, trailing arguments for CLI.
    pub args: &'a [String],
}

/// A controller action.
pub trait Handler: Send + Sync {
    /// Serves one call.
    ///
    /// # Errors
    ///
    /// Whatever the action fails with; the front controller wraps it in
    /// [`RouterError::Handler`](crate::RouterError::Handler).
    fn handle(&self, call: &ActionCall<'_>) -> Result<Response, HandlerError>;
}

/// A [`Handler`] made from a function.
pub struct FnHandler<F>(F);

impl<F> Handler for FnHandler<F>
where
    F: Fn(&ActionCall<'_>) -> Result<Response, HandlerError> + Send + Sync,
{
    fn handle(&self, call: &ActionCall<'_>) -> Result<Response, HandlerError> {
        (self.0)(call)
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHandler(<function>)")
    }
}

/// Wraps a function as a handler.
pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: Fn(&ActionCall<'_>) -> Result<Response, HandlerError> + Send + Sync,
{
    FnHandler(f)
}

/// Decides whether a guarded action may run.
pub trait AuthGate: Send + Sync {
    /// Returns true if the request may proceed.
    fn check(&self, request: &Request) -> bool;

    /// The response sent instead of running the action.
    fn on_fail(&self, _request: &Request) -> Response {
        Response::forbidden()
    }
}

struct Guarded {
    inner: Arc<dyn Handler>,
    gate: Arc<dyn AuthGate>,
}

impl Handler for Guarded {
    fn handle(&self, call: &ActionCall<'_>) -> Result<Response, HandlerError> {
        if self.gate.check(call.request) {
            self.inner.handle(call)
        } else {
            tracing::info!(
                controller = call.route.controller(),
                action = call.route.action(),
                "auth check failed"
            );
            Ok(self.gate.on_fail(call.request))
        }
    }
}

/// Runs `handler` only when `gate` admits the request.
#[must_use]
pub fn guarded(handler: Arc<dyn Handler>, gate: Arc<dyn AuthGate>) -> Arc<dyn Handler> {
    Arc::new(Guarded {
        inner: handler,
        gate,
    })
}

/// The closed set of actions routes can reach.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<(String, String), Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the handler for `controller::action`.
    pub fn register(
        &mut self,
        controller: impl Into<String>,
        action: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> &mut Self {
        self.handlers
            .insert((controller.into(), action.into()), Arc::new(handler));
        self
    }

    /// Registers a function for `controller::action`.
    pub fn register_fn<F>(
        &mut self,
        controller: impl Into<String>,
        action: impl Into<String>,
        f: F,
    ) -> &mut Self
    where
        F: Fn(&ActionCall<'_>) -> Result<Response, HandlerError> + Send + Sync + 'static,
    {
        self.register(controller, action, handler_fn(f))
    }

    /// Looks up `controller::action`.
    #[must_use]
    pub fn get(&self, controller: &str, action: &str) -> Option<Arc<dyn Handler>> {
        self.handlers
            .get(&(controller.to_owned(), action.to_owned()))
            .cloned()
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self
            .handlers
            .keys()
            .map(|(c, a)| format!("{c}::{a}"))
            .collect();
        keys.sort_unstable();
        f.debug_struct("HandlerRegistry").field("handlers", &keys).finish()
    }
}
