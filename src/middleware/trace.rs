//! Request tracing.

use std::future::Future;
use std::time::Instant;

use http::Method;
use tracing::{Instrument, info, info_span, warn};

use crate::response::Response;

/// Runs `fut` inside a `request` span and logs how it finished.
///
/// 5xx responses are logged at `warn`, everything else at `info`.
pub(crate) async fn trace<F>(method: &Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, path);
    let started = Instant::now();
    let res = fut.instrument(span.clone()).await;

    let status = res.status_code().as_u16();
    let elapsed = started.elapsed();
    span.in_scope(|| {
        if res.status_code().is_server_error() {
            warn!(status, ?elapsed, "request failed");
        } else {
            info!(status, ?elapsed, "request completed");
        }
    });
    res
}
