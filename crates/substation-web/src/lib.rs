//! HTTP query API over the Substation record store.
//!
//! All routes are read-only `GET`s against a shared
//! [`substation_core::RecordStore`]; see [`build_router`] for the full table.

pub mod routes;
pub mod server;

mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server};
pub use state::AppState;
pub use substation_config::ServerConfig;
