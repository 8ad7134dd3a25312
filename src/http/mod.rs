//! HTTP surface: terminal API, terminal and report pages, CSV export.

pub mod error;
pub mod pages;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;

pub use router::build_app_router;
pub use server::{init_tracing, serve};
pub use state::AppState;
