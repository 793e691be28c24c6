//! outage-api-server: read-only HTTP API over ingested chat outage data
//!
//! Serves two endpoints from Postgres: the list of current utility outages
//! and the original chat message behind a given outage record. The workload
//! is stateless and idempotent; the only shared resource is the connection
//! pool.

pub mod config;
pub mod db;
pub mod http;
pub mod metrics;

pub use config::Config;
