//! Vocabulary namespace table.
//!
//! Maps the short prefixes the explorer uses (`hydra`, `sh`, `xsd`, ...) to
//! their base IRIs. Eight entries are fixed, well-known vocabularies; the
//! ninth, `api`, is the deployment's own API namespace and is derived from
//! the origin the application is served from. The origin is a constructor
//! parameter rather than an ambient global, so two deployments (or two
//! tests) can hold differently-rooted tables side by side.
//!
//! The table performs prefix expansion only. Parsing or serialising RDF is a
//! different crate's job.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Errors from namespace lookup and construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamespaceError {
    #[error("no such namespace prefix: {0:?}")]
    UnknownPrefix(String),

    #[error(
        "invalid origin {0:?}: expected scheme://authority with no trailing \
         slash (e.g. https://graphs.example.org)"
    )]
    InvalidOrigin(String),

    #[error("invalid compact IRI {0:?}: expected prefix:localName")]
    InvalidCurie(String),
}

/// `scheme "://" authority`, nothing after the authority.
static ORIGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^/\s]+$").expect("invalid origin regex")
});

/// The prefix → base-IRI table for one deployment.
///
/// # Example
///
/// ```
/// use graphscape::ns::NamespaceTable;
///
/// let ns = NamespaceTable::new("https://graphs.example.org").unwrap();
/// assert_eq!(ns.iri("api").unwrap(), "https://graphs.example.org/api/");
/// assert_eq!(
///     ns.resolve("sh", "NodeShape").unwrap(),
///     "http://www.w3.org/ns/shacl#NodeShape"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    entries: HashMap<String, String>,
}

/// The fixed vocabulary entries present in every table.
const FIXED: [(&str, &str); 8] = [
    ("hydra", "http://www.w3.org/ns/hydra/core#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("schema", "http://schema.org/"),
    ("sh", "http://www.w3.org/ns/shacl#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("ex", "http://example.org/"),
    ("dash", "http://datashapes.org/dash#"),
];

impl NamespaceTable {
    /// Build the table for a deployment served from `origin`
    /// (scheme + host + optional port, e.g. `"https://graphs.example.org"`).
    ///
    /// The `api` entry becomes `{origin}/api/`; the remaining eight entries
    /// are fixed. Origins with a path, trailing slash, or no scheme are
    /// rejected so the concatenated IRI cannot come out malformed.
    pub fn new(origin: &str) -> Result<Self, NamespaceError> {
        if !ORIGIN_RE.is_match(origin) {
            return Err(NamespaceError::InvalidOrigin(origin.to_string()));
        }
        let mut entries: HashMap<String, String> = FIXED
            .iter()
            .map(|(p, iri)| (p.to_string(), iri.to_string()))
            .collect();
        entries.insert("api".to_string(), format!("{}/api/", origin));
        Ok(Self { entries })
    }

    /// The base IRI registered for `prefix`.
    pub fn iri(&self, prefix: &str) -> Result<&str, NamespaceError> {
        self.entries
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| NamespaceError::UnknownPrefix(prefix.to_string()))
    }

    /// Bind `local` under the base IRI of `prefix`, producing a full IRI.
    pub fn resolve(&self, prefix: &str, local: &str) -> Result<String, NamespaceError> {
        Ok(format!("{}{}", self.iri(prefix)?, local))
    }

    /// Expand a compact IRI of the form `prefix:localName`.
    pub fn expand(&self, curie: &str) -> Result<String, NamespaceError> {
        let (prefix, local) = curie
            .split_once(':')
            .ok_or_else(|| NamespaceError::InvalidCurie(curie.to_string()))?;
        self.resolve(prefix, local)
    }

    /// Compact a full IRI to `prefix:localName` using the longest matching
    /// base, or `None` when no registered base is a prefix of it.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.entries
            .iter()
            .filter(|(_, base)| iri.starts_with(base.as_str()))
            .max_by_key(|(_, base)| base.len())
            .map(|(prefix, base)| format!("{}:{}", prefix, &iri[base.len()..]))
    }

    /// All `(prefix, base IRI)` pairs, sorted by prefix for stable output.
    pub fn prefixes(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(p, iri)| (p.as_str(), iri.as_str()))
            .collect();
        out.sort_by_key(|(p, _)| *p);
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NamespaceTable {
        NamespaceTable::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn exactly_nine_prefixes() {
        let ns = table();
        let prefixes: Vec<&str> = ns.prefixes().iter().map(|(p, _)| *p).collect();
        assert_eq!(
            prefixes,
            vec!["api", "dash", "ex", "hydra", "rdf", "rdfs", "schema", "sh", "xsd"]
        );
    }

    #[test]
    fn fixed_iris_match_vocabularies() {
        let ns = table();
        assert_eq!(ns.iri("hydra").unwrap(), "http://www.w3.org/ns/hydra/core#");
        assert_eq!(ns.iri("rdf").unwrap(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        assert_eq!(ns.iri("schema").unwrap(), "http://schema.org/");
        assert_eq!(ns.iri("sh").unwrap(), "http://www.w3.org/ns/shacl#");
        assert_eq!(ns.iri("xsd").unwrap(), "http://www.w3.org/2001/XMLSchema#");
        assert_eq!(ns.iri("rdfs").unwrap(), "http://www.w3.org/2000/01/rdf-schema#");
        assert_eq!(ns.iri("ex").unwrap(), "http://example.org/");
        assert_eq!(ns.iri("dash").unwrap(), "http://datashapes.org/dash#");
    }

    #[test]
    fn api_entry_follows_origin() {
        let a = NamespaceTable::new("http://localhost:8080").unwrap();
        let b = NamespaceTable::new("https://graphs.example.org").unwrap();
        assert_eq!(a.iri("api").unwrap(), "http://localhost:8080/api/");
        assert_eq!(b.iri("api").unwrap(), "https://graphs.example.org/api/");
    }

    #[test]
    fn same_origin_same_table() {
        assert_eq!(table(), table());
    }

    #[test]
    fn bad_origins_rejected() {
        for origin in [
            "",
            "localhost:8080",
            "http://localhost:8080/",
            "http://localhost:8080/app",
            "http://",
            "http://bad host",
        ] {
            assert_eq!(
                NamespaceTable::new(origin),
                Err(NamespaceError::InvalidOrigin(origin.to_string())),
                "origin {:?} should be rejected",
                origin
            );
        }
    }

    #[test]
    fn resolve_binds_local_name() {
        let ns = table();
        assert_eq!(
            ns.resolve("sh", "NodeShape").unwrap(),
            "http://www.w3.org/ns/shacl#NodeShape"
        );
        assert_eq!(
            ns.resolve("api", "people/alice").unwrap(),
            "http://localhost:8080/api/people/alice"
        );
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let ns = table();
        assert_eq!(
            ns.iri("owl"),
            Err(NamespaceError::UnknownPrefix("owl".to_string()))
        );
        assert!(matches!(
            ns.resolve("owl", "Class"),
            Err(NamespaceError::UnknownPrefix(_))
        ));
    }

    #[test]
    fn expand_curie() {
        let ns = table();
        assert_eq!(
            ns.expand("rdf:type").unwrap(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
        );
        assert_eq!(
            ns.expand("no-colon-here"),
            Err(NamespaceError::InvalidCurie("no-colon-here".to_string()))
        );
    }

    #[test]
    fn compact_iri() {
        let ns = table();
        assert_eq!(
            ns.compact("http://www.w3.org/ns/shacl#path"),
            Some("sh:path".to_string())
        );
        assert_eq!(
            ns.compact("http://localhost:8080/api/people/alice"),
            Some("api:people/alice".to_string())
        );
        assert_eq!(ns.compact("urn:uuid:1234"), None);
    }
}
