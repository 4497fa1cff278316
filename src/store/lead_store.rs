//! Lead Store
//!
//! Ordered in-memory collection of leads with synchronous write-through
//! persistence. Every successful mutation leaves the storage snapshot equal
//! to the in-memory collection. Mutations build a candidate collection and
//! only adopt it after the snapshot write succeeds, so a failed write
//! returns the error with memory unchanged.
//!
//! ```text
//! add / update / delete → candidate Vec<Lead> → serialize → set_item(key) → adopt
//! load                  → get_item(key)      → parse Vec<Lead> → replace Vec
//! ```

use crate::lead::{Lead, LeadId};
use crate::storage::KeyValueStorage;
use crate::store::error::{StoreError, StoreResult};
use crate::store::options::{CorruptSnapshot, MissingSnapshot, PersistenceMode, StoreOptions};
use std::collections::HashSet;

/// Result of [`LeadStore::load_leads`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot found and loaded; number of leads now in memory
    Loaded(usize),
    /// No snapshot stored; memory handled per `MissingSnapshot`
    Missing,
    /// Snapshot was corrupt and memory was cleared per `CorruptSnapshot::Reset`
    Reset,
}

/// Lead collection mirrored to a key-value storage slot
#[derive(Debug)]
pub struct LeadStore<S> {
    leads: Vec<Lead>,
    storage: S,
    options: StoreOptions,
}

impl<S: KeyValueStorage> LeadStore<S> {
    /// Create an empty store with default options. Nothing is read from
    /// storage until [`load_leads`](Self::load_leads) is called.
    pub fn new(storage: S) -> Self {
        Self::with_options(storage, StoreOptions::default())
    }

    /// Create an empty store with explicit options
    pub fn with_options(storage: S, options: StoreOptions) -> Self {
        Self {
            leads: Vec::new(),
            storage,
            options,
        }
    }

    /// Create a store and immediately load the persisted snapshot
    pub fn open(storage: S, options: StoreOptions) -> StoreResult<Self> {
        let mut store = Self::with_options(storage, options);
        store.load_leads()?;
        Ok(store)
    }

    /// Append a lead and persist. Duplicate ids are not rejected.
    pub fn add_lead(&mut self, lead: Lead) -> StoreResult<()> {
        tracing::debug!("Adding lead {}", lead.id);
        let mut candidate = self.leads.clone();
        candidate.push(lead);
        self.commit(candidate)
    }

    /// Serialize the whole collection and overwrite the stored snapshot
    pub fn save_leads(&mut self) -> StoreResult<()> {
        self.commit(self.leads.clone())
    }

    /// Write `candidate` as the snapshot and, only once the write has
    /// succeeded, make it the in-memory collection. On error memory is
    /// left exactly as it was.
    fn commit(&mut self, mut candidate: Vec<Lead>) -> StoreResult<()> {
        if self.options.persistence == PersistenceMode::Deduplicate {
            let removed = dedup_exact(&mut candidate)?;
            if removed > 0 {
                tracing::debug!("Collapsed {} duplicate leads before save", removed);
            }
        }

        let snapshot = serde_json::to_string(&candidate)?;
        self.storage.set_item(&self.options.key, &snapshot)?;

        tracing::debug!(
            "Saved {} leads under key {:?} ({} bytes)",
            candidate.len(),
            self.options.key,
            snapshot.len()
        );
        self.leads = candidate;
        Ok(())
    }

    /// Replace the in-memory collection with the persisted snapshot
    pub fn load_leads(&mut self) -> StoreResult<LoadOutcome> {
        let key = &self.options.key;
        let Some(snapshot) = self.storage.get_item(key)? else {
            if self.options.missing_snapshot == MissingSnapshot::Reset {
                self.leads.clear();
            }
            tracing::info!("No lead snapshot under key {:?}", key);
            return Ok(LoadOutcome::Missing);
        };

        match serde_json::from_str::<Vec<Lead>>(&snapshot) {
            Ok(leads) => {
                self.leads = leads;
                tracing::info!("Loaded {} leads from key {:?}", self.leads.len(), key);
                Ok(LoadOutcome::Loaded(self.leads.len()))
            }
            Err(source) => match self.options.corrupt_snapshot {
                CorruptSnapshot::Fail => Err(StoreError::CorruptSnapshot {
                    key: key.clone(),
                    source,
                }),
                CorruptSnapshot::Reset => {
                    tracing::warn!(
                        "Discarding corrupt lead snapshot under key {:?}: {}",
                        key,
                        source
                    );
                    self.leads.clear();
                    Ok(LoadOutcome::Reset)
                }
            },
        }
    }

    /// First lead whose id equals `id`
    pub fn get_lead_by_id(&self, id: &LeadId) -> Option<&Lead> {
        self.leads.iter().find(|lead| &lead.id == id)
    }

    /// Shallow-merge `updated` into the first lead with the same id and
    /// persist. Returns `false` (and writes nothing) when no lead matches.
    pub fn update_lead(&mut self, updated: Lead) -> StoreResult<bool> {
        let Some(index) = self.leads.iter().position(|lead| lead.id == updated.id) else {
            tracing::debug!("Update skipped, no lead {}", updated.id);
            return Ok(false);
        };

        tracing::debug!("Updating lead {}", updated.id);
        let mut candidate = self.leads.clone();
        candidate[index].merge(updated);
        self.commit(candidate)?;
        Ok(true)
    }

    /// Remove every lead whose id equals `id` and persist. Returns the
    /// number of removed leads; the snapshot is written even when zero.
    pub fn delete_lead(&mut self, id: &LeadId) -> StoreResult<usize> {
        let mut candidate = self.leads.clone();
        candidate.retain(|lead| &lead.id != id);
        let removed = self.leads.len() - candidate.len();
        tracing::debug!("Deleting lead {} ({} removed)", id, removed);

        self.commit(candidate)?;
        Ok(removed)
    }

    /// One past the largest integer id in the collection, `1` if none
    pub fn next_numeric_id(&self) -> LeadId {
        let max = self
            .leads
            .iter()
            .filter_map(|lead| match lead.id {
                LeadId::Number(n) => Some(n),
                LeadId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        LeadId::Number(max.saturating_add(1))
    }

    /// Leads in insertion order
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning the storage backend
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Remove exact duplicates in place, keeping the first occurrence.
/// Lead payloads are ordered maps, so the serialized form is canonical.
fn dedup_exact(leads: &mut Vec<Lead>) -> Result<usize, serde_json::Error> {
    let mut seen = HashSet::with_capacity(leads.len());
    let mut keep = Vec::with_capacity(leads.len());
    for lead in leads.iter() {
        keep.push(seen.insert(serde_json::to_string(lead)?));
    }

    let before = leads.len();
    let mut flags = keep.into_iter();
    leads.retain(|_| flags.next().unwrap_or(true));
    Ok(before - leads.len())
}
