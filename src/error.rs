//! Unified error type.

use thiserror::Error;

/// The error type returned by [`Server`](crate::Server).
///
/// Application-level errors (400, 404, 500) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: binding to a port or accepting a connection.
/// Store failures have their own [`StoreError`](crate::StoreError).
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
