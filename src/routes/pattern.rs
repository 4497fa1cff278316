//! Route path patterns
//!
//! Syntax:
//! - `/customers` static segment (case-sensitive)
//! - `/:id` named parameter, matches exactly one segment
//! - `/*any` catch-all, matches zero or more remaining segments; must be last

use crate::routes::error::{RouteError, RouteResult};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

/// A parsed path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern. Patterns must start with `/`.
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        let parts: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter name is empty"));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(invalid("catch-all name is empty"));
                }
                if i + 1 != parts.len() {
                    return Err(invalid("catch-all must be the last segment"));
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pattern with parameter names erased; two patterns with the same
    /// shape match exactly the same paths.
    pub fn shape(&self) -> Vec<String> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(s) => s.clone(),
                Segment::Param(_) => ":".to_string(),
                Segment::CatchAll(_) => "*".to_string(),
            })
            .collect()
    }

    /// True if this pattern ends in a catch-all segment
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }

    /// Match already-split path segments, returning bound parameters.
    /// Parameter values are percent-decoded.
    pub fn matches(&self, path: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if path.get(i) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(i)?;
                    params.insert(name.clone(), decode(value));
                }
                Segment::CatchAll(name) => {
                    let rest = path.get(i..).unwrap_or_default();
                    let value: Vec<String> = rest.iter().map(|s| decode(s)).collect();
                    params.insert(name.clone(), value.join("/"));
                    return Some(params);
                }
            }
        }

        (path.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Split a request path into non-empty segments, dropping query and fragment
pub fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let pattern = RoutePattern::parse("/customers/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Static("customers".to_string()),
                Segment::Param("id".to_string())
            ]
        );
        assert!(!pattern.is_catch_all());

        assert!(RoutePattern::parse("/").unwrap().segments().is_empty());
        assert!(RoutePattern::parse("/*any").unwrap().is_catch_all());
    }

    #[test]
    fn test_shape_ignores_param_names() {
        let a = RoutePattern::parse("/customers/:id").unwrap();
        let b = RoutePattern::parse("/customers/:key").unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), RoutePattern::parse("/customers/new").unwrap().shape());
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["new", "/:", "/*", "/*rest/more", ""] {
            let err = RoutePattern::parse(bad).unwrap_err();
            assert!(matches!(err, RouteError::InvalidPattern { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_static_match() {
        let pattern = RoutePattern::parse("/new").unwrap();
        assert!(pattern.matches(&["new"]).is_some());
        assert!(pattern.matches(&["New"]).is_none());
        assert!(pattern.matches(&["new", "x"]).is_none());
        assert!(pattern.matches(&[]).is_none());
    }

    #[test]
    fn test_param_match() {
        let pattern = RoutePattern::parse("/customers/:id").unwrap();
        let params = pattern.matches(&["customers", "42"]).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));

        let params = pattern.matches(&["customers", "acme%20inc"]).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("acme inc"));

        assert!(pattern.matches(&["customers"]).is_none());
    }

    #[test]
    fn test_catch_all_match() {
        let pattern = RoutePattern::parse("/*any").unwrap();
        assert_eq!(pattern.matches(&[]).unwrap()["any"], "");
        assert_eq!(pattern.matches(&["a", "b"]).unwrap()["any"], "a/b");
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path("/customers/7/"), vec!["customers", "7"]);
        assert_eq!(split_path("/new?from=list#top"), vec!["new"]);
        assert_eq!(split_path("//a//b"), vec!["a", "b"]);
    }
}
