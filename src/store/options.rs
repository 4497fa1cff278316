//! Lead store options
//!
//! Persistence behavior knobs. The defaults reproduce the plain
//! write-through store: raw snapshots under `"leads"`, a missing snapshot
//! keeps memory as-is, a corrupt snapshot is reported to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key holding the serialized lead array
pub const DEFAULT_STORAGE_KEY: &str = "leads";

/// How the collection is written to storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceMode {
    /// Serialize the collection as-is
    #[default]
    Raw,
    /// Collapse exact duplicate records (first occurrence wins) before
    /// serializing. The in-memory collection is collapsed too.
    Deduplicate,
}

/// What `load_leads` does when storage holds no snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSnapshot {
    /// Leave the in-memory collection untouched
    #[default]
    Keep,
    /// Clear the in-memory collection
    Reset,
}

/// What `load_leads` does when the snapshot cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptSnapshot {
    /// Return `StoreError::CorruptSnapshot`, memory untouched
    #[default]
    Fail,
    /// Log a warning and clear the in-memory collection. Storage is left
    /// alone until the next mutation overwrites it.
    Reset,
}

/// Options for a [`LeadStore`](crate::store::LeadStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub persistence: PersistenceMode,

    #[serde(default)]
    pub missing_snapshot: MissingSnapshot,

    #[serde(default)]
    pub corrupt_snapshot: CorruptSnapshot,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key: default_key(),
            persistence: PersistenceMode::default(),
            missing_snapshot: MissingSnapshot::default(),
            corrupt_snapshot: CorruptSnapshot::default(),
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different storage key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn persistence(mut self, mode: PersistenceMode) -> Self {
        self.persistence = mode;
        self
    }

    pub fn missing_snapshot(mut self, policy: MissingSnapshot) -> Self {
        self.missing_snapshot = policy;
        self
    }

    pub fn corrupt_snapshot(mut self, policy: CorruptSnapshot) -> Self {
        self.corrupt_snapshot = policy;
        self
    }
}

impl fmt::Display for PersistenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceMode::Raw => write!(f, "raw"),
            PersistenceMode::Deduplicate => write!(f, "deduplicate"),
        }
    }
}

impl FromStr for PersistenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(PersistenceMode::Raw),
            "deduplicate" | "dedup" => Ok(PersistenceMode::Deduplicate),
            _ => Err(format!("Unknown persistence mode: {}", s)),
        }
    }
}
