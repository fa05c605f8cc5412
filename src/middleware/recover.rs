//! Panic recovery.

use http::StatusCode;
use tracing::{Instrument, error};

use crate::handler::BoxFuture;
use crate::response::Response;

/// Drives a handler future to completion on a dedicated task.
///
/// The task boundary is what contains a panic: tokio reports it as a
/// `JoinError` and the request gets an empty `500 Internal Server Error`.
pub(crate) async fn recover(fut: BoxFuture) -> Response {
    match tokio::spawn(fut.in_current_span()).await {
        Ok(res) => res,
        Err(e) if e.is_panic() => {
            error!("handler panicked");
            Response::status(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            error!("handler task failed: {e}");
            Response::status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
