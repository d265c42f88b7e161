//! Gatekeeper Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::{ConsoleNavigator, ReqwestHttpClient, SystemClock};
pub use persistence::{FileStorage, MemoryStorage, default_storage_path};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
