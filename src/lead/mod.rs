//! Lead records
//!
//! - **types**: `Lead` (typed id + open payload) and `LeadId`

pub mod types;

pub use types::{Lead, LeadId};
