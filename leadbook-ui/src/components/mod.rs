//! UI Components
//!
//! Reusable Leptos components.

pub mod lead_form;
pub mod nav;
pub mod toast;

pub use lead_form::LeadForm;
pub use nav::Nav;
pub use toast::Toast;
