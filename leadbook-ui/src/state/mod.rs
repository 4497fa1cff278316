//! State Management
//!
//! Global application state and the browser storage backend.

pub mod global;
pub mod local_storage;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use local_storage::LocalStorage;
