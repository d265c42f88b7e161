//! Key-value storage adapters.
//!
//! - [`FileStorage`]: a JSON object on disk, for sessions that survive restarts
//! - [`MemoryStorage`]: process-local, for one-shot use

mod file_storage;
mod memory_storage;

pub use file_storage::{FileStorage, default_storage_path};
pub use memory_storage::MemoryStorage;
