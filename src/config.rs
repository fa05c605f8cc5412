//! Runtime configuration.
//!
//! Every setting can come from a command-line flag or a `PASTA_*` environment
//! variable; flags win. `RUST_LOG`, when set, overrides `--log-level`.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

/// Which [`DocumentStore`](crate::store::DocumentStore) backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// MongoDB via the official driver.
    Mongodb,
    /// Process-local, lost on exit.
    Memory,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "pasta", version, about = "HTTP resource service for pastas", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "PASTA_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Store backend
    #[arg(long, env = "PASTA_STORE", value_enum, default_value_t = StoreKind::Mongodb)]
    pub store: StoreKind,

    /// MongoDB connection string
    #[arg(long, env = "PASTA_MONGO_URI", default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    /// Database holding the pasta collection
    #[arg(long, env = "PASTA_DATABASE", default_value = "test")]
    pub database: String,

    /// Collection pastas are stored in
    #[arg(long, env = "PASTA_COLLECTION", default_value = "pastas")]
    pub collection: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "PASTA_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "PASTA_JSON_LOGS")]
    pub json_logs: bool,
}
