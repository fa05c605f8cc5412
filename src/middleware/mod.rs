//! Middleware layer.
//!
//! Cross-cutting concerns the router wraps around every request:
//!
//! - [`trace`] — per-request span with method and path, plus a completion
//!   event carrying status and latency.
//! - [`recover`] — runs the handler on its own task so a panic becomes a
//!   `500` for that request instead of tearing down the connection.

mod recover;
mod trace;

pub(crate) use recover::recover;
pub(crate) use trace::trace;
