//! Requests and responses

use serde::Serialize;

/// An incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// An HTTP request.
    Web(WebRequest),
    /// A command-line invocation.
    Cli(CliRequest),
}

impl From<WebRequest> for Request {
    fn from(request: WebRequest) -> Self {
        Self::Web(request)
    }
}

impl From<CliRequest> for Request {
    fn from(request: CliRequest) -> Self {
        Self::Cli(request)
    }
}

/// The parts of an HTTP request routing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebRequest {
    method: String,
    uri: String,
    body: String,
}

impl WebRequest {
    /// Creates a request with an empty body.
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            body: String::new(),
        }
    }

    /// Sets the raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// HTTP method as received.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Full request URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The URI without its query string, still percent-encoded.
    #[must_use]
    pub fn url_path(&self) -> &str {
        self.uri.split_once('?').map_or(self.uri.as_str(), |(path, _)| path)
    }

    /// The query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.uri.split_once('?').map(|(_, query)| query)
    }

    /// Raw request body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A command-line invocation: `argv[0]` is the program, `argv[1]` the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliRequest {
    args: Vec<String>,
}

impl CliRequest {
    /// Wraps the full argument vector, program name included.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// All arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The route argument.
    #[must_use]
    pub fn route(&self) -> Option<&str> {
        self.args.get(1).map(String::as_str)
    }
}

/// What a handler produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status, or `0` for success of a CLI action.
    pub status: u16,
    /// Rendered body.
    pub body: String,
}

impl Response {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `200` with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// `200` with `data` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `data` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(data: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::ok(serde_json::to_string(data)?))
    }

    /// `403` with a short body.
    #[must_use]
    pub fn forbidden() -> Self {
        Self::new(403, "Forbidden")
    }

    /// Returns true for 2xx statuses and the CLI's `0`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 0 || (200..300).contains(&self.status)
    }
}
