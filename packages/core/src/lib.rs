//! Core data layer for the Graphscape graph explorer.
//!
//! This crate carries the static data the explorer frontend is seeded with —
//! the default force-layout settings, the example dependency graph, and the
//! vocabulary namespace table — together with the validation and text
//! rendering that make those usable from Rust tooling. It deliberately stops
//! short of the interesting machinery around it: no force simulation, no
//! canvas drawing, no RDF parsing. Those live in the consuming engine.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`forces`] | [`ForceConfig`] and per-force blocks with shipped defaults |
//! | [`dataset`] | [`GraphData`] node/link types and the bundled seed graph |
//! | [`ns`] | [`NamespaceTable`]: prefix → base-IRI mapping, origin-aware |
//! | [`validation`] | Opt-in integrity/range checks for external data |
//! | [`render`] | Plain-text summaries for terminals |
//!
//! # Quick start
//!
//! ```rust
//! use graphscape::{ForceConfig, GraphData, NamespaceTable};
//!
//! // Shipped defaults, ready to serialise for the layout engine.
//! let forces = ForceConfig::default();
//! assert!(forces.charge.enabled);
//!
//! // The example systemd boot graph.
//! let graph = GraphData::seed();
//! assert_eq!(graph.node_count(), 12);
//!
//! // Namespace table rooted at this deployment's origin.
//! let ns = NamespaceTable::new("https://graphs.example.org").unwrap();
//! assert_eq!(ns.iri("api").unwrap(), "https://graphs.example.org/api/");
//! ```

pub mod dataset;
pub mod forces;
pub mod ns;
pub mod render;
pub mod validation;

pub use dataset::{GraphData, Link, LinkKind, Node};
pub use forces::{
    CenterForce, ChargeForce, CollideForce, ForceConfig, LinkForce, XForce, YForce,
};
pub use ns::{NamespaceError, NamespaceTable};
pub use validation::{validate_forces, validate_graph, ForceError, GraphError};
