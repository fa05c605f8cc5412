//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;

/// An incoming HTTP request with its body fully buffered and its path
/// parameters already extracted by the router.
#[derive(Debug)]
pub struct Request {
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(body: Bytes, params: HashMap<String, String>) -> Self {
        Self { body, params }
    }

    pub fn body(&self) -> &[u8] { &self.body }

    /// Returns a named path parameter, percent-decoded.
    ///
    /// For a route `/pasta/{name}`, `req.param("name")` on `/pasta/penne%20rigate`
    /// returns `Some("penne rigate")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
