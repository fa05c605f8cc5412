//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler, and every handler receives a clone of the router's state.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::{Method, StatusCode};
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::middleware;
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup, pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router<S = ()> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

impl Router<()> {
    pub fn new() -> Self {
        Self::with_state(())
    }
}

impl Default for Router<()> {
    fn default() -> Self { Self::new() }
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// A router whose handlers all receive a clone of `state`.
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is malformed or conflicts with an existing route
    /// for the same method.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::POST, path, handler)
    }

    /// Routes one buffered request and produces one response.
    ///
    /// Unmatched method + path combinations get an empty `404 Not Found`.
    /// A handler that panics yields `500 Internal Server Error`.
    pub async fn handle(&self, req: http::Request<Bytes>) -> Response {
        let (parts, body) = req.into_parts();
        let method = parts.method;
        let path = parts.uri.path().to_owned();

        let route = self.lookup(&method, &path);
        middleware::trace(&method, &path, async move {
            match route {
                Some((handler, params)) => {
                    let req = Request::new(body, params);
                    middleware::recover(handler.call(req, self.state.clone())).await
                }
                None => Response::status(StatusCode::NOT_FOUND),
            }
        })
        .await
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), percent_decode(v)))
            .collect();
        Some((handler, params))
    }
}

/// Standard percent-decoding; a segment that does not decode to UTF-8 is kept
/// verbatim.
fn percent_decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_owned())
}
