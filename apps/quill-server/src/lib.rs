//! # Quill Server
//!
//! actix-web HTTP surface for the blog post service. The binary in `main.rs`
//! wires configuration and telemetry; everything routable lives here so tests
//! can mount the same application.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use handlers::configure_routes;
pub use state::AppState;
