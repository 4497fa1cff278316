//! Routing Table
//!
//! Static declaration of URL paths to pages, consumed by the frontend
//! router. Resolution here follows the same first-match rules and is used
//! by the CLI and tests.
//!
//! ```text
//! /                  MainLayout
//!   /new             LeadForm
//!   /customers/:id   LeadForm
//!   /                CustomersList
//! /*any              ErrorNotFound   (always last)
//! ```

pub mod error;
pub mod pattern;
pub mod table;

pub use error::{RouteError, RouteResult};
pub use pattern::{RoutePattern, Segment};
pub use table::{
    customer_id_from_param, customer_path, paths, Page, RouteDef, RouteEntry, RouteMatch,
    RouteTable, ROUTES,
};
