//! # pasta
//!
//! A small HTTP resource service for one entity, [`Pasta`], stored in a
//! document database.
//!
//! ## Layers
//!
//! - **Framework** — radix-tree routing via [`matchit`], hyper for HTTP/1.1
//!   and HTTP/2, graceful shutdown, per-request tracing and panic recovery.
//! - **Model** — [`Pasta`] with its wire (JSON) and document (BSON) forms.
//! - **Store** — [`DocumentStore`], one collection behind a trait, with an
//!   in-memory backend and a MongoDB backend (feature `mongodb`).
//! - **API** — [`api::app`] wires the six pasta routes and the health probes.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pasta::{MemoryStore, Server, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pasta::Error> {
//!     let app = api::app(Arc::new(MemoryStore::new()));
//!     Server::bind("127.0.0.1:8080".parse().unwrap()).serve(app).await
//! }
//! ```
//!
//! Handlers are plain async functions that receive the request and a clone of
//! the router's state:
//!
//! ```rust
//! use pasta::{Request, Response, Router};
//!
//! async fn shout(req: Request, _: ()) -> Response {
//!     Response::text(req.param("word").unwrap_or_default().to_uppercase())
//! }
//!
//! let app = Router::new().get("/shout/{word}", shout);
//! ```

mod error;
mod handler;
mod middleware;
mod request;
mod response;
mod router;
mod server;

pub mod api;
pub mod config;
pub mod health;
pub mod model;
pub mod store;
pub mod telemetry;

pub use error::Error;
pub use handler::Handler;
pub use model::{ModelError, Pasta};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use store::{DocumentStore, MemoryStore, SharedStore, StoreError};
