//! The pasta HTTP API.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET  | `/hello`        | [`greet`] |
//! | POST | `/pasta-pong`   | [`pasta_pong`] |
//! | POST | `/pasta`        | [`create_pasta`] |
//! | GET  | `/hello/{name}` | [`greet_by_name`] |
//! | GET  | `/pasta/{name}` | [`get_pasta`] |
//! | GET  | `/pasta`        | [`list_pastas`] |
//! | GET  | `/healthz`      | [`health::liveness`] |
//! | GET  | `/readyz`       | [`health::readiness`] |
//!
//! Structured errors share one shape, `{"status": "<message>"}`. There are no
//! update or delete routes.

use http::StatusCode;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::health;
use crate::model::Pasta;
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::store::{SharedStore, StoreError};
use crate::Request;

/// Builds the application router around `store`.
pub fn app(store: SharedStore) -> Router<SharedStore> {
    Router::with_state(store)
        .get("/hello", greet)
        .post("/pasta-pong", pasta_pong)
        .post("/pasta", create_pasta)
        .get("/hello/{name}", greet_by_name)
        .get("/pasta/{name}", get_pasta)
        .get("/pasta", list_pastas)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

/// Body of every non-pasta JSON response.
#[derive(Debug, Serialize)]
pub struct Status<'a> {
    pub status: &'a str,
}

pub(crate) fn status(code: StatusCode, message: &str) -> Response {
    (code, Json(Status { status: message })).into_response()
}

// GET /hello
pub async fn greet(_req: Request, _store: SharedStore) -> &'static str {
    "hello world"
}

// POST /pasta-pong
//
// Decodes the body and sends it straight back.
pub async fn pasta_pong(req: Request, _store: SharedStore) -> Response {
    match Pasta::decode(req.body()) {
        Ok(pasta) => Json(pasta).into_response(),
        Err(e) => {
            debug!("rejected pasta-pong body: {e}");
            status(StatusCode::BAD_REQUEST, &e.to_string())
        }
    }
}

// POST /pasta
//
// Nothing is written unless the body decodes. Success is reported once the
// insert call returns; no identifier is echoed.
pub async fn create_pasta(req: Request, store: SharedStore) -> Response {
    let pasta = match Pasta::decode(req.body()) {
        Ok(pasta) => pasta,
        Err(e) => {
            debug!("rejected pasta body: {e}");
            return status(StatusCode::BAD_REQUEST, &e.to_string());
        }
    };

    match store.insert(pasta.to_document()).await {
        Ok(()) => status(StatusCode::OK, "ok"),
        Err(e) => {
            error!(name = %pasta.name, "insert failed: {e}");
            status(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

// GET /hello/{name}
pub async fn greet_by_name(req: Request, _store: SharedStore) -> String {
    let name = req.param("name").unwrap_or_default();
    format!("hi there, {name}!")
}

// GET /pasta/{name}
//
// "No match", "query failed" and "stored document unreadable" all collapse to
// a 404 carrying the store's message. With duplicate names the store decides
// which one comes back.
pub async fn get_pasta(req: Request, store: SharedStore) -> Response {
    let name = req.param("name").unwrap_or_default();
    match find_by_name(&store, name).await {
        Ok(pasta) => Json(pasta).into_response(),
        Err(e) => status(StatusCode::NOT_FOUND, &e.to_string()),
    }
}

async fn find_by_name(store: &SharedStore, name: &str) -> Result<Pasta, StoreError> {
    let doc = store
        .find_one(Pasta::named(name).to_document())
        .await?
        .ok_or(StoreError::NotFound)?;
    Pasta::from_document(&doc).map_err(|e| StoreError::Malformed(e.to_string()))
}

// GET /pasta
pub async fn list_pastas(_req: Request, store: SharedStore) -> Response {
    match find_all(&store).await {
        Ok(pastas) => Json(pastas).into_response(),
        Err(e) => {
            warn!("listing pastas failed: {e}");
            status(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

async fn find_all(store: &SharedStore) -> Result<Vec<Pasta>, StoreError> {
    store
        .find_all()
        .await?
        .iter()
        .map(|doc| Pasta::from_document(doc).map_err(|e| StoreError::Malformed(e.to_string())))
        .collect()
}
