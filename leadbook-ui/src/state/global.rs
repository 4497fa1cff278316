//! Global Application State
//!
//! Owns the lead store and mirrors its collection into a Leptos signal so
//! views re-render after every mutation.

use leadbook::{Lead, LeadId, LeadStore, LoadOutcome, StoreResult};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::local_storage::LocalStorage;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current lead collection, in insertion order
    pub leads: RwSignal<Vec<Lead>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    store: Rc<RefCell<LeadStore<LocalStorage>>>,
}

/// Create the store, load the persisted snapshot and provide state to the
/// component tree. Call once from the app root.
pub fn provide_global_state() {
    let state = GlobalState {
        leads: create_rw_signal(Vec::new()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        store: Rc::new(RefCell::new(LeadStore::new(LocalStorage::new()))),
    };

    state.reload();
    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Re-read the persisted snapshot
    pub fn reload(&self) {
        let result = self.store.borrow_mut().load_leads();
        match result {
            Ok(LoadOutcome::Loaded(count)) => {
                web_sys::console::log_1(&format!("Loaded {} leads", count).into());
            }
            Ok(_) => {}
            Err(e) => self.show_error(&format!("Could not load leads: {}", e)),
        }
        self.sync();
    }

    /// Look up a lead by id
    pub fn lead(&self, id: &LeadId) -> Option<Lead> {
        self.store.borrow().get_lead_by_id(id).cloned()
    }

    /// Id to use for a newly created lead
    pub fn next_id(&self) -> LeadId {
        self.store.borrow().next_numeric_id()
    }

    /// Add a lead; returns false (and shows an error) if saving failed
    pub fn add_lead(&self, lead: Lead) -> bool {
        let result = self.store.borrow_mut().add_lead(lead);
        self.finish(result, "Lead added").is_some()
    }

    /// Merge changes into an existing lead
    pub fn update_lead(&self, lead: Lead) -> bool {
        let id = lead.id.clone();
        let result = self.store.borrow_mut().update_lead(lead);
        match self.finish(result, "Lead saved") {
            Some(true) => true,
            Some(false) => {
                self.show_error(&format!("Lead {} no longer exists", id));
                false
            }
            None => false,
        }
    }

    /// Delete every lead with this id
    pub fn delete_lead(&self, id: &LeadId) -> bool {
        let result = self.store.borrow_mut().delete_lead(id);
        self.finish(result, "Lead deleted").is_some()
    }

    /// Publish the store's collection and report the outcome
    fn finish<T>(&self, result: StoreResult<T>, success: &str) -> Option<T> {
        self.sync();
        match result {
            Ok(value) => {
                self.show_success(success);
                Some(value)
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Lead store error: {}", e).into());
                self.show_error(&e.to_string());
                None
            }
        }
    }

    fn sync(&self) {
        let leads = self.store.borrow().leads().to_vec();
        self.leads.set(leads);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
