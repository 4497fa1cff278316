//! Key-Value Storage
//!
//! Persistence backends for the lead store:
//!
//! - **backend**: The `KeyValueStorage` trait and the in-memory backend
//! - **file**: One-file-per-key backend with atomic replace
//! - **error**: Error types
//!
//! The browser `localStorage` backend lives in the frontend crate and
//! implements the same trait.
//!
//! # Example
//!
//! ```rust
//! use leadbook::storage::{KeyValueStorage, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! storage.set_item("leads", "[]").unwrap();
//! assert_eq!(storage.get_item("leads").unwrap().as_deref(), Some("[]"));
//! ```

pub mod backend;
pub mod error;
pub mod file;

pub use backend::{KeyValueStorage, MemoryStorage};
pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
