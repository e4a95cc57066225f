//! Error types for routing and dispatch

use thiserror::Error;

/// Error returned by a handler. Boxed so handlers pick their own error type.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for router operations
pub type RouterResult<T> = Result<T, RouterError>;

/// Routing and dispatch failures.
#[derive(Error, Debug)]
pub enum RouterError {
    /// A web route is not a valid regular expression
    #[error("invalid route pattern '{pattern}' for method '{method}'")]
    InvalidPattern {
        /// Lower-cased method section of the route map
        method: String,
        /// The route pattern as configured
        pattern: String,
        /// The compile error
        #[source]
        source: regex::Error,
    },

    /// No route matches the request
    #[error("unable to assign a controller to route '{route}'")]
    NoRoute {
        /// Web method or `cli`
        section: String,
        /// The path or CLI route that matched nothing
        route: String,
    },

    /// A CLI request carried no route argument
    #[error("undefined route for the cli request: the route must be the first argument")]
    MissingCliRoute,

    /// A route names a controller action that was never registered
    #[error("no handler registered for '{controller}::{action}'")]
    UnknownHandler {
        /// Controller name from the route
        controller: String,
        /// Action name from the route
        action: String,
    },

    /// The handler ran and failed
    #[error("handler '{controller}::{action}' failed")]
    Handler {
        /// Controller name from the route
        controller: String,
        /// Action name from the route
        action: String,
        /// The handler's error
        #[source]
        source: HandlerError,
    },

    /// A TOML route map could not be parsed
    #[error("invalid TOML route map")]
    Toml(#[from] toml::de::Error),

    /// A JSON route map could not be parsed
    #[error("invalid JSON route map")]
    Json(#[from] serde_json::Error),
}
