//! outage-api-core: domain records and mapping rules for the outage API
//!
//! Pure logic only, no I/O: composite-identifier parsing, Telegram link
//! construction, and the text-field normalization rules applied at the
//! database mapping boundary.

pub mod ids;
pub mod links;
pub mod models;
pub mod text;

pub use ids::{InvalidOutageId, SourceKey};
pub use models::{Address, Outage, Source, SourceRef};
