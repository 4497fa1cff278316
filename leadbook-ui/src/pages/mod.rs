//! Pages
//!
//! Top-level page components for each route.

pub mod customers_list;
pub mod lead_page;

pub use customers_list::CustomersList;
pub use lead_page::LeadPage;
