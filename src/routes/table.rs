//! Route table
//!
//! Declarative route definitions compiled once into an immutable table.
//! Entries are tried in declaration order, depth-first through children;
//! the first full match wins. An entry with children is a layout and only
//! matches through one of its children. Child paths are written in full.

use crate::lead::LeadId;
use crate::routes::error::{RouteError, RouteResult};
use crate::routes::pattern::{split_path, RoutePattern};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Path constants shared with the frontend router
pub mod paths {
    pub const ROOT: &str = "/";
    pub const NEW_LEAD: &str = "/new";
    pub const CUSTOMER: &str = "/customers/:id";
    pub const CATCH_ALL: &str = "/*any";
}

/// Pages and layouts a route can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Shell wrapping every page
    MainLayout,
    /// Lead list, the home page
    CustomersList,
    /// Create (`/new`) or edit (`/customers/:id`) a lead
    LeadForm,
    /// Fallback for unmatched paths
    ErrorNotFound,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::MainLayout => "MainLayout",
            Page::CustomersList => "CustomersList",
            Page::LeadForm => "LeadForm",
            Page::ErrorNotFound => "ErrorNotFound",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A route definition: path pattern, page, nested child routes
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub page: Page,
    pub children: &'static [RouteDef],
}

impl RouteDef {
    pub const fn leaf(path: &'static str, page: Page) -> Self {
        Self {
            path,
            page,
            children: &[],
        }
    }

    pub const fn layout(path: &'static str, page: Page, children: &'static [RouteDef]) -> Self {
        Self {
            path,
            page,
            children,
        }
    }
}

/// The application's routes. The catch-all stays last so that more
/// specific routes match first.
pub static ROUTES: &[RouteDef] = &[
    RouteDef::layout(paths::ROOT, Page::MainLayout, MAIN_LAYOUT_CHILDREN),
    RouteDef::leaf(paths::CATCH_ALL, Page::ErrorNotFound),
];

const MAIN_LAYOUT_CHILDREN: &[RouteDef] = &[
    RouteDef::leaf(paths::NEW_LEAD, Page::LeadForm),
    RouteDef::leaf(paths::CUSTOMER, Page::LeadForm),
    RouteDef::leaf(paths::ROOT, Page::CustomersList),
];

/// Marks a text id whose plain form would read back as a number (or
/// would itself start with the marker).
const TEXT_ID_MARKER: char = '~';

/// Link to the edit page of a lead. Read the `id` parameter back with
/// [`customer_id_from_param`].
pub fn customer_path(id: &LeadId) -> String {
    let segment = match id {
        LeadId::Text(text)
            if text.starts_with(TEXT_ID_MARKER)
                || matches!(LeadId::from_input(text), LeadId::Number(_)) =>
        {
            format!("{}{}", TEXT_ID_MARKER, text)
        }
        other => other.to_string(),
    };
    format!("/customers/{}", urlencoding::encode(&segment))
}

/// Decoded `id` parameter of a [`customer_path`] link back to the lead id
pub fn customer_id_from_param(raw: &str) -> LeadId {
    match raw.strip_prefix(TEXT_ID_MARKER) {
        Some(text) => LeadId::Text(text.to_string()),
        None => LeadId::from_input(raw),
    }
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    pattern: RoutePattern,
    page: Page,
    children: Vec<CompiledRoute>,
}

/// A resolved path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Layouts first, matched page last
    pub pages: Vec<Page>,
    /// Bound path parameters
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    /// The innermost matched page
    pub fn page(&self) -> Option<Page> {
        self.pages.last().copied()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// One row of [`RouteTable::entries`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub depth: usize,
    pub path: String,
    pub page: Page,
}

/// Compiled, immutable route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Validate and compile route definitions
    pub fn compile(defs: &[RouteDef]) -> RouteResult<Self> {
        Ok(Self {
            routes: compile_level(defs)?,
        })
    }

    /// Compile the application's [`ROUTES`]
    pub fn standard() -> RouteResult<Self> {
        Self::compile(ROUTES)
    }

    /// Resolve a path (query string and fragment are ignored)
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments = split_path(path);
        let found = resolve_level(&self.routes, &segments);
        match &found {
            Some(m) => tracing::trace!("Resolved {:?} to {:?}", path, m.pages),
            None => tracing::trace!("No route for {:?}", path),
        }
        found
    }

    /// Depth-first listing of every entry, in declaration order
    pub fn entries(&self) -> Vec<RouteEntry> {
        let mut out = Vec::new();
        collect_entries(&self.routes, 0, &mut out);
        out
    }
}

fn compile_level(defs: &[RouteDef]) -> RouteResult<Vec<CompiledRoute>> {
    let mut seen = HashSet::new();
    let mut compiled = Vec::with_capacity(defs.len());

    for (i, def) in defs.iter().enumerate() {
        let pattern = RoutePattern::parse(def.path)?;
        if pattern.is_catch_all() && i + 1 != defs.len() {
            return Err(RouteError::CatchAllNotLast(def.path.to_string()));
        }
        if !seen.insert(pattern.shape()) {
            return Err(RouteError::DuplicatePath(def.path.to_string()));
        }

        compiled.push(CompiledRoute {
            pattern,
            page: def.page,
            children: compile_level(def.children)?,
        });
    }

    Ok(compiled)
}

fn resolve_level(routes: &[CompiledRoute], path: &[&str]) -> Option<RouteMatch> {
    for route in routes {
        if route.children.is_empty() {
            if let Some(params) = route.pattern.matches(path) {
                return Some(RouteMatch {
                    pages: vec![route.page],
                    params,
                });
            }
        } else if let Some(mut inner) = resolve_level(&route.children, path) {
            inner.pages.insert(0, route.page);
            return Some(inner);
        }
    }
    None
}

fn collect_entries(routes: &[CompiledRoute], depth: usize, out: &mut Vec<RouteEntry>) {
    for route in routes {
        out.push(RouteEntry {
            depth,
            path: route.pattern.as_str().to_string(),
            page: route.page,
        });
        collect_entries(&route.children, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard().unwrap()
    }

    #[test]
    fn test_root_resolves_to_customers_list() {
        let m = table().resolve("/").unwrap();
        assert_eq!(m.pages, vec![Page::MainLayout, Page::CustomersList]);
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_new_lead_route() {
        let m = table().resolve("/new").unwrap();
        assert_eq!(m.pages, vec![Page::MainLayout, Page::LeadForm]);
        assert_eq!(table().resolve("/new/").unwrap().page(), Some(Page::LeadForm));
    }

    #[test]
    fn test_customer_route_binds_id() {
        let m = table().resolve("/customers/42?tab=notes").unwrap();
        assert_eq!(m.page(), Some(Page::LeadForm));
        assert_eq!(m.param("id"), Some("42"));
    }

    #[test]
    fn test_unmatched_paths_hit_catch_all() {
        for path in ["/customers", "/customers/1/extra", "/nope", "/NEW"] {
            let m = table().resolve(path).unwrap();
            assert_eq!(m.pages, vec![Page::ErrorNotFound], "{}", path);
        }
        let m = table().resolve("/a/b").unwrap();
        assert_eq!(m.param("any"), Some("a/b"));
    }

    #[test]
    fn test_catch_all_is_last() {
        let last = ROUTES.last().unwrap();
        assert_eq!(last.path, paths::CATCH_ALL);
        assert_eq!(last.page, Page::ErrorNotFound);
    }

    #[test]
    fn test_catch_all_not_last_rejected() {
        static BAD: &[RouteDef] = &[
            RouteDef::leaf("/*any", Page::ErrorNotFound),
            RouteDef::leaf("/new", Page::LeadForm),
        ];
        assert_eq!(
            RouteTable::compile(BAD).unwrap_err(),
            RouteError::CatchAllNotLast("/*any".to_string())
        );
    }

    #[test]
    fn test_duplicate_sibling_rejected() {
        static BAD: &[RouteDef] = &[
            RouteDef::leaf("/customers/:id", Page::LeadForm),
            RouteDef::leaf("/customers/:key", Page::LeadForm),
        ];
        assert!(matches!(
            RouteTable::compile(BAD).unwrap_err(),
            RouteError::DuplicatePath(_)
        ));
    }

    #[test]
    fn test_invalid_child_pattern_rejected() {
        const CHILDREN: &[RouteDef] = &[RouteDef::leaf("new", Page::LeadForm)];
        static BAD: &[RouteDef] = &[RouteDef::layout("/", Page::MainLayout, CHILDREN)];
        assert!(matches!(
            RouteTable::compile(BAD).unwrap_err(),
            RouteError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn test_table_without_fallback_can_miss() {
        static NO_FALLBACK: &[RouteDef] = &[RouteDef::leaf("/new", Page::LeadForm)];
        let table = RouteTable::compile(NO_FALLBACK).unwrap();
        assert!(table.resolve("/other").is_none());
    }

    #[test]
    fn test_entries_listing() {
        let entries = table().entries();
        let rows: Vec<(usize, &str, Page)> = entries
            .iter()
            .map(|e| (e.depth, e.path.as_str(), e.page))
            .collect();
        assert_eq!(
            rows,
            vec![
                (0, "/", Page::MainLayout),
                (1, "/new", Page::LeadForm),
                (1, "/customers/:id", Page::LeadForm),
                (1, "/", Page::CustomersList),
                (0, "/*any", Page::ErrorNotFound),
            ]
        );
    }

    #[test]
    fn test_customer_path_round_trips() {
        let path = customer_path(&LeadId::from("acme inc/eu"));
        assert_eq!(path, "/customers/acme%20inc%2Feu");
        let m = table().resolve(&path).unwrap();
        assert_eq!(m.param("id"), Some("acme inc/eu"));

        assert_eq!(customer_path(&LeadId::from(7)), "/customers/7");
    }

    #[test]
    fn test_customer_path_keeps_id_type() {
        let table = table();
        let ids = [
            LeadId::from(7),
            LeadId::from(-3),
            LeadId::from("7"),
            LeadId::from("-3"),
            LeadId::from("c-1"),
            LeadId::from("~x"),
            LeadId::from("~7"),
            LeadId::from("acme inc/eu"),
        ];
        for id in ids {
            let path = customer_path(&id);
            let m = table.resolve(&path).unwrap();
            assert_eq!(m.page(), Some(Page::LeadForm), "{}", path);
            let raw = m.param("id").unwrap();
            assert_eq!(customer_id_from_param(raw), id, "{}", path);
        }

        assert_eq!(customer_path(&LeadId::from("7")), "/customers/~7");
        assert_eq!(customer_path(&LeadId::from("c-1")), "/customers/c-1");
    }
}
