//! Mediarelay API Library
//!
//! This crate provides the HTTP handlers, upload pipeline, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod services;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod probe;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use probe::MediaProbe;
pub use state::AppState;
