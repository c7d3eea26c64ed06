//! Opt-in validation for datasets and force configurations.
//!
//! Construction never validates — [`GraphData`](crate::GraphData) and
//! [`ForceConfig`](crate::ForceConfig) are plain data, and enforcement
//! belongs to whoever is about to act on the values. These checks exist for
//! the boundary where data arrives from outside (a user-supplied JSON file,
//! a hand-edited settings blob) and a broken index or negative radius would
//! otherwise surface as a confusing failure deep inside the layout engine.

use std::collections::HashSet;

use thiserror::Error;

use crate::dataset::GraphData;
use crate::forces::ForceConfig;

/// Errors returned when a [`GraphData`] fails integrity checking.
// Implemented by hand rather than via `#[derive(Error)]`: thiserror treats a
// field named `source` as the error's source, and `SourceOutOfRange::source`
// is a plain index, not a nested error.
#[derive(Debug, PartialEq, Eq)]
pub enum GraphError {
    SourceOutOfRange {
        index: usize,
        source: usize,
        node_count: usize,
    },

    TargetOutOfRange {
        index: usize,
        target: usize,
        node_count: usize,
    },

    EmptyNodeName(usize),

    DuplicateNodeName {
        index: usize,
        first: usize,
        name: String,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::SourceOutOfRange {
                index,
                source,
                node_count,
            } => write!(
                f,
                "link {index}: source {source} is out of range (node count {node_count})"
            ),
            GraphError::TargetOutOfRange {
                index,
                target,
                node_count,
            } => write!(
                f,
                "link {index}: target {target} is out of range (node count {node_count})"
            ),
            GraphError::EmptyNodeName(index) => write!(f, "node {index} has an empty name"),
            GraphError::DuplicateNodeName { index, first, name } => write!(
                f,
                "node {index} duplicates the name {name:?} of node {first}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Errors returned when a [`ForceConfig`] fails range checking.
#[derive(Debug, Error, PartialEq)]
pub enum ForceError {
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("charge.distanceMax ({max}) must exceed charge.distanceMin ({min})")]
    DistanceRangeInverted { min: f64, max: f64 },

    #[error("charge.distanceMin must be >= 0, got {0}")]
    NegativeDistanceMin(f64),

    #[error("{field} must be at least 1 iteration, got {value}")]
    ZeroIterations { field: &'static str, value: u32 },
}

/// Check referential integrity of a dataset: every link endpoint indexes an
/// existing node, every node has a usable, unique name.
///
/// Returns the first problem found, in link order then node order. Self-loops
/// and repeated source/target pairs are valid.
pub fn validate_graph(graph: &GraphData) -> Result<(), GraphError> {
    let node_count = graph.nodes.len();

    for (index, link) in graph.links.iter().enumerate() {
        if link.source >= node_count {
            return Err(GraphError::SourceOutOfRange {
                index,
                source: link.source,
                node_count,
            });
        }
        if link.target >= node_count {
            return Err(GraphError::TargetOutOfRange {
                index,
                target: link.target,
                node_count,
            });
        }
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(node_count);
    for (index, node) in graph.nodes.iter().enumerate() {
        if node.name.is_empty() {
            return Err(GraphError::EmptyNodeName(index));
        }
        if !seen.insert(&node.name) {
            let first = graph
                .nodes
                .iter()
                .position(|n| n.name == node.name)
                .unwrap_or(index);
            return Err(GraphError::DuplicateNodeName {
                index,
                first,
                name: node.name.clone(),
            });
        }
    }

    Ok(())
}

/// Check a force configuration against the ranges the layout engine assumes:
/// normalized targets in `[0, 1]`, positive radii and distances, at least one
/// iteration per iterative force.
///
/// Checks apply to disabled blocks too — a block can be toggled on at runtime
/// without revalidation.
pub fn validate_forces(cfg: &ForceConfig) -> Result<(), ForceError> {
    unit_range("center.x", cfg.center.x)?;
    unit_range("center.y", cfg.center.y)?;

    if cfg.charge.distance_min < 0.0 {
        return Err(ForceError::NegativeDistanceMin(cfg.charge.distance_min));
    }
    if cfg.charge.distance_max <= cfg.charge.distance_min {
        return Err(ForceError::DistanceRangeInverted {
            min: cfg.charge.distance_min,
            max: cfg.charge.distance_max,
        });
    }

    unit_range("collide.strength", cfg.collide.strength)?;
    positive("collide.radius", cfg.collide.radius)?;
    iterations("collide.iterations", cfg.collide.iterations)?;

    unit_range("forceX.x", cfg.force_x.x)?;
    unit_range("forceY.y", cfg.force_y.y)?;

    positive("link.distance", cfg.link.distance)?;
    iterations("link.iterations", cfg.link.iterations)?;

    Ok(())
}

// --- helpers -----------------------------------------------------------------

fn unit_range(field: &'static str, value: f64) -> Result<(), ForceError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ForceError::OutOfUnitRange { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ForceError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ForceError::NotPositive { field, value })
    }
}

fn iterations(field: &'static str, value: u32) -> Result<(), ForceError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ForceError::ZeroIterations { field, value })
    }
}

// --- tests -------------------------------------------------------------------
