//! Lead Store
//!
//! - **lead_store**: CRUD over the lead collection with write-through persistence
//! - **options**: Storage key and snapshot policies
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use leadbook::lead::{Lead, LeadId};
//! use leadbook::storage::MemoryStorage;
//! use leadbook::store::LeadStore;
//!
//! let mut store = LeadStore::new(MemoryStorage::new());
//! store.add_lead(Lead::new(1).field("name", "Acme")).unwrap();
//! store.update_lead(Lead::new(1).field("stage", "contacted")).unwrap();
//!
//! let lead = store.get_lead_by_id(&LeadId::from(1)).unwrap();
//! assert_eq!(lead.get_str("name"), Some("Acme"));
//! assert_eq!(lead.get_str("stage"), Some("contacted"));
//! ```

pub mod error;
pub mod lead_store;
pub mod options;

pub use error::{StoreError, StoreResult};
pub use lead_store::{LeadStore, LoadOutcome};
pub use options::{CorruptSnapshot, MissingSnapshot, PersistenceMode, StoreOptions, DEFAULT_STORAGE_KEY};
