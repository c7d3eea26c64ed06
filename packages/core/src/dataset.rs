//! Graph dataset types and the bundled seed graph.
//!
//! A [`GraphData`] is the wire format the layout frontend consumes: a node
//! array plus a link array, where links address nodes *by position* in the
//! node array. That index-based linkage is load-bearing — reordering,
//! renumbering, or deduplicating nodes breaks every link that follows, so
//! nothing in this module rewrites the arrays after construction.
//!
//! [`GraphData::seed`] returns the example graph shipped with the explorer:
//! a small systemd-style boot dependency graph (12 nodes, 14 links).

use serde::{Deserialize, Serialize};

/// A graph node.
///
/// Nodes carry no explicit id; their identity is their index in
/// [`GraphData::nodes`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Human-readable identifier, unique within a dataset.
    pub name: String,
    /// Numeric cluster/category id, used for colouring.
    pub group: u32,
    /// Style/category tag applied to the rendered node.
    pub class: String,
}

impl Node {
    pub fn new(name: impl Into<String>, group: u32, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group,
            class: class.into(),
        }
    }
}

/// The relationship a link expresses.
///
/// `depends` and `needs` are the kinds the seed graph uses, but the wire
/// contract is an open string: datasets may carry kinds this crate has never
/// seen, and they must round-trip unchanged. Unknown values land in
/// [`LinkKind::Other`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum LinkKind {
    /// Hard dependency.
    Depends,
    /// Soft requirement.
    Needs,
    /// Any kind this crate does not know about.
    Other(String),
}

impl From<String> for LinkKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "depends" => LinkKind::Depends,
            "needs" => LinkKind::Needs,
            _ => LinkKind::Other(s),
        }
    }
}

impl From<LinkKind> for String {
    fn from(kind: LinkKind) -> Self {
        kind.to_string()
    }
}

/// Formats the kind as its wire string (e.g. `"depends"`).
impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Depends => write!(f, "depends"),
            LinkKind::Needs => write!(f, "needs"),
            LinkKind::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A directed, typed, weighted link between two nodes.
///
/// `source` and `target` are indices into [`GraphData::nodes`]. Self-loops
/// are allowed, as are multiple links between the same ordered pair (the
/// seed graph contains one such pair, with differing weight and kind).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    /// Link weight/strength. The seed data uses small integers ≥ 1, but the
    /// contract is any number.
    pub value: f64,
    /// Relationship kind. Serialises under the key `type`.
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

impl Link {
    pub fn new(source: usize, target: usize, value: f64, kind: LinkKind) -> Self {
        Self {
            source,
            target,
            value,
            kind,
        }
    }
}

/// A complete dataset: nodes plus index-addressed links.
///
/// This is a traversal/transfer structure, not a storage engine. It is built
/// once (deserialized or via [`GraphData::seed`]) and read; the helpers below
/// never mutate it. Referential integrity is *not* enforced on construction —
/// call [`validate_graph`](crate::validation::validate_graph) before trusting
/// indices from an external file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl GraphData {
    /// The example graph bundled with the explorer: the early boot graph of a
    /// systemd machine. 12 nodes in two groups, 14 links.
    ///
    /// The data is reproduced exactly as shipped, including the
    /// `systemd-initctl.socker` misspelling and the duplicated `11 → 3` pair
    /// — downstream snapshots compare against this literal.
    pub fn seed() -> Self {
        let nodes = vec![
            Node::new("firmware", 1, "system"),
            Node::new("loader", 1, "system"),
            Node::new("kernel", 1, "system"),
            Node::new("systemd", 1, "mount"),
            Node::new("-.mount", 1, "mount"),
            Node::new("init.scope", 1, "init"),
            Node::new("system.slice", 1, "init"),
            Node::new("system-getty.slice", 1, "init"),
            Node::new("systemd-initctl.socker", 1, "init"),
            Node::new("tmp.mount", 1, "init"),
            Node::new("sys-devices", 2, "init"),
            Node::new("boot.mount", 2, "init"),
        ];
        let links = vec![
            Link::new(0, 1, 2.0, LinkKind::Depends),
            Link::new(1, 2, 1.0, LinkKind::Depends),
            Link::new(2, 1, 8.0, LinkKind::Depends),
            Link::new(3, 2, 6.0, LinkKind::Depends),
            Link::new(4, 3, 1.0, LinkKind::Needs),
            Link::new(5, 3, 1.0, LinkKind::Needs),
            Link::new(6, 3, 1.0, LinkKind::Needs),
            Link::new(7, 3, 1.0, LinkKind::Needs),
            Link::new(8, 3, 2.0, LinkKind::Needs),
            Link::new(9, 3, 1.0, LinkKind::Needs),
            Link::new(11, 10, 1.0, LinkKind::Depends),
            Link::new(11, 3, 3.0, LinkKind::Depends),
            Link::new(11, 2, 3.0, LinkKind::Depends),
            Link::new(11, 3, 5.0, LinkKind::Needs),
        ];
        Self { nodes, links }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `index`, if in range.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Links leaving `index` (where it is the source).
    pub fn outgoing(&self, index: usize) -> Vec<&Link> {
        self.links.iter().filter(|l| l.source == index).collect()
    }

    /// Links arriving at `index` (where it is the target).
    pub fn incoming(&self, index: usize) -> Vec<&Link> {
        self.links.iter().filter(|l| l.target == index).collect()
    }

    /// Indices of all nodes in the given cluster group.
    pub fn by_group(&self, group: u32) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.group == group)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of all nodes with the given class tag.
    pub fn by_class(&self, class: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.class == class)
            .map(|(i, _)| i)
            .collect()
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape() {
        let g = GraphData::seed();
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.link_count(), 14);
        assert_eq!(g.node(0).map(|n| n.name.as_str()), Some("firmware"));
        assert_eq!(g.node(0).map(|n| n.class.as_str()), Some("system"));
        assert_eq!(g.node(11).map(|n| n.name.as_str()), Some("boot.mount"));
        assert_eq!(g.node(11).map(|n| n.group), Some(2));
    }

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(GraphData::seed(), GraphData::seed());
    }

    #[test]
    fn seed_keeps_duplicate_pair() {
        // 11 → 3 appears twice with different weight and kind; dedup would
        // change the rendered graph.
        let g = GraphData::seed();
        let dup: Vec<&Link> = g
            .links
            .iter()
            .filter(|l| l.source == 11 && l.target == 3)
            .collect();
        assert_eq!(dup.len(), 2);
        assert_eq!(dup[0].kind, LinkKind::Depends);
        assert_eq!(dup[0].value, 3.0);
        assert_eq!(dup[1].kind, LinkKind::Needs);
        assert_eq!(dup[1].value, 5.0);
    }

    #[test]
    fn outgoing_and_incoming() {
        let g = GraphData::seed();
        // systemd (3) is the hub: one outgoing dependency, many incomers
        assert_eq!(g.outgoing(3).len(), 1);
        assert_eq!(g.incoming(3).len(), 8);
        assert_eq!(g.outgoing(11).len(), 4);
        assert_eq!(g.incoming(0).len(), 0);
    }

    #[test]
    fn group_and_class_lookups() {
        let g = GraphData::seed();
        assert_eq!(g.by_group(2), vec![10, 11]);
        assert_eq!(g.by_class("system"), vec![0, 1, 2]);
        assert_eq!(g.by_class("mount"), vec![3, 4]);
        assert!(g.by_class("nope").is_empty());
    }

    #[test]
    fn link_kind_wire_strings() {
        assert_eq!(LinkKind::Depends.to_string(), "depends");
        assert_eq!(LinkKind::Needs.to_string(), "needs");
        assert_eq!(LinkKind::from("wants".to_string()), LinkKind::Other("wants".into()));
    }

    #[test]
    fn unknown_kind_roundtrips() {
        let json = r#"{ "source": 0, "target": 1, "value": 1, "type": "wants" }"#;
        let link: Link = serde_json::from_str(json).unwrap();
        assert_eq!(link.kind, LinkKind::Other("wants".into()));
        let re = serde_json::to_value(&link).unwrap();
        assert_eq!(re["type"], "wants");
    }

    #[test]
    fn kind_serialises_under_type_key() {
        let link = Link::new(0, 1, 2.0, LinkKind::Depends);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["type"], "depends");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn deserializes_frontend_literal() {
        let json = r#"{
            "nodes": [
                { "name": "firmware", "group": 1, "class": "system" },
                { "name": "loader", "group": 1, "class": "system" }
            ],
            "links": [
                { "source": 0, "target": 1, "value": 2, "type": "depends" }
            ]
        }"#;
        let g: GraphData = serde_json::from_str(json).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.links[0], Link::new(0, 1, 2.0, LinkKind::Depends));
    }
}
