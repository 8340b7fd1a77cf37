//! Mediarelay Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! object-key generation shared across all mediarelay components.

pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod storage_types;

// Flat re-exports so consumers can ignore the module layout.
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use models::{MediaKind, ServiceStatus, StoredObject, UploadResponse};
pub use storage_types::StorageBackend;
