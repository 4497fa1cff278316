//! # Leadbook
//!
//! Lead tracking core: an ordered collection of lead records kept in sync
//! with a key-value storage slot, plus the application's route table.
//!
//! ## Features
//!
//! - **Write-through persistence**: every mutation re-serializes the whole
//!   collection under a single storage key
//! - **Pluggable storage**: in-memory, file-backed, or browser `localStorage`
//!   (in the frontend crate) behind one trait
//! - **Declarative routing**: static route table with a catch-all fallback
//!
//! ## Modules
//!
//! - [`lead`]: Lead record types
//! - [`storage`]: Key-value storage backends
//! - [`store`]: The lead store
//! - [`routes`]: Route table and path resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use leadbook::{Lead, LeadId, LeadStore, MemoryStorage};
//!
//! let mut store = LeadStore::new(MemoryStorage::new());
//! store.add_lead(Lead::new(1).field("name", "A")).unwrap();
//! store.add_lead(Lead::new(2).field("name", "B")).unwrap();
//! store.update_lead(Lead::new(1).field("name", "A2")).unwrap();
//! store.delete_lead(&LeadId::from(2)).unwrap();
//!
//! assert_eq!(store.leads(), &[Lead::new(1).field("name", "A2")]);
//!
//! // A fresh store over the same storage sees the same collection
//! let mut reopened = LeadStore::new(store.into_storage());
//! reopened.load_leads().unwrap();
//! assert_eq!(reopened.len(), 1);
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod lead;
#[cfg(feature = "native")]
pub mod logging;
pub mod routes;
pub mod storage;
pub mod store;

// Re-export top-level types for convenience
pub use lead::{Lead, LeadId};

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};

pub use store::{
    CorruptSnapshot, LeadStore, LoadOutcome, MissingSnapshot, PersistenceMode, StoreError,
    StoreOptions, StoreResult,
};

pub use routes::{Page, RouteError, RouteMatch, RouteTable, ROUTES};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, StorageConfig};
