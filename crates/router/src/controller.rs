//! The front controller: one entry point for every request

use std::sync::Arc;

use crate::error::{RouterError, RouterResult};
use crate::handler::{ActionCall, AuthGate, HandlerRegistry, guarded};
use crate::request::{Request, Response};
use crate::route::{CompiledRoutes, Resolved, RouteMap};

/// Resolves requests to actions and runs them.
///
/// Built once at startup from the route map, the handler registry and an
/// optional auth gate, then shared by reference.
pub struct FrontController {
    routes: CompiledRoutes,
    handlers: HandlerRegistry,
    gate: Option<Arc<dyn AuthGate>>,
}

impl FrontController {
    /// Compiles `routes` and takes ownership of `handlers`.
    ///
    /// # Errors
    ///
    /// [`RouterError::InvalidPattern`] if a web route does not compile.
    pub fn new(routes: &RouteMap, handlers: HandlerRegistry) -> RouterResult<Self> {
        Ok(Self {
            routes: CompiledRoutes::compile(routes)?,
            handlers,
            gate: None,
        })
    }

    /// Guards every route with `auth` enabled behind `gate`.
    #[must_use]
    pub fn with_gate(mut self, gate: Arc<dyn AuthGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Picks the route for `request` without running it.
    ///
    /// # Errors
    ///
    /// [`RouterError::NoRoute`] or [`RouterError::MissingCliRoute`].
    pub fn resolve(&self, request: &Request) -> RouterResult<Resolved<'_>> {
        match request {
            Request::Web(web) => self.routes.resolve_web(web.method(), web.url_path()),
            Request::Cli(cli) => self.routes.resolve_cli(cli.args()),
        }
    }

    /// Resolves `request` and runs the matching action.
    ///
    /// # Errors
    ///
    /// Any resolution error, [`RouterError::UnknownHandler`] if the route
    /// names an unregistered action, or [`RouterError::Handler`] if the
    /// action fails.
    pub fn dispatch(&self, request: &Request) -> RouterResult<Response> {
        let resolved = self.resolve(request)?;
        let controller = resolved.config.controller();
        let action = resolved.config.action();

        let mut handler =
            self.handlers
                .get(controller, action)
                .ok_or_else(|| RouterError::UnknownHandler {
                    controller: controller.to_owned(),
                    action: action.to_owned(),
                })?;

        if resolved.auth {
            if let Some(gate) = &self.gate {
                handler = guarded(handler, Arc::clone(gate));
            }
        }

        tracing::debug!(
            controller,
            action,
            args = resolved.args.len(),
            auth = resolved.auth,
            "dispatching"
        );

        let call = ActionCall {
            request,
            route: resolved.config,
            args: &resolved.args,
        };
        handler.handle(&call).map_err(|source| RouterError::Handler {
            controller: controller.to_owned(),
            action: action.to_owned(),
            source,
        })
    }
}

impl std::fmt::Debug for FrontController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontController")
            .field("routes", &self.routes)
            .field("handlers", &self.handlers)
            .field("gate", &self.gate.is_some())
            .finish()
    }
}
