//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can it reach the store? Failure → pulled from the load-balancer. |

use http::StatusCode;
use tracing::warn;

use crate::api::status;
use crate::store::SharedStore;
use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`. Deliberately touches nothing else.
pub async fn liveness(_req: Request, _store: SharedStore) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` once the store answers a ping, otherwise
/// `503 Service Unavailable` with the store's message.
pub async fn readiness(_req: Request, store: SharedStore) -> Response {
    match store.ping().await {
        Ok(()) => Response::text("ready"),
        Err(e) => {
            warn!("store not ready: {e}");
            status(StatusCode::SERVICE_UNAVAILABLE, &e.to_string())
        }
    }
}
