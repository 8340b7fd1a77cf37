//! Mediarelay Storage Library
//!
//! This crate provides the storage abstraction for mediarelay and its two
//! implementations: S3-compatible object storage (Cloudflare R2 in the
//! reference deployment) and the local filesystem.
//!
//! Keys are generated by `mediarelay-core::keys` and must not contain `..`
//! or a leading `/`; backends reject anything else.

pub mod factory;
pub mod local;
pub mod s3;
pub mod traits;

// Flat re-exports so consumers can ignore the module layout.
pub use factory::create_storage;
pub use local::LocalStorage;
pub use mediarelay_core::StorageBackend;
pub use s3::{S3Storage, S3StorageConfig};
pub use traits::{Storage, StorageError, StorageResult};
