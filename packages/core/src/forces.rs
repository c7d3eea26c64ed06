//! Default force-layout configuration.
//!
//! This module defines the tunable parameters a force-directed layout engine
//! consumes: centering, many-body charge, collision avoidance, axis-aligned
//! attraction, and link distance. The `Default` impls reproduce the shipped
//! defaults exactly, and the serde field names match the JSON the layout
//! frontend expects (`distanceMin`, `forceX`, ...).
//!
//! No force is simulated here — this crate only carries the settings. Every
//! block has an `enabled` flag the engine checks before applying it; the
//! numeric fields are passed through without validation (see
//! [`validate_forces`](crate::validation::validate_forces) for the opt-in
//! range check).

use serde::{Deserialize, Serialize};

/// Normalized target point for the centering force.
///
/// Coordinates are fractions of the viewport, so `{ x: 0.5, y: 0.5 }` keeps
/// the graph centred regardless of canvas size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CenterForce {
    pub x: f64,
    pub y: f64,
}

impl Default for CenterForce {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// Many-body charge force. Negative `strength` repels, positive attracts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChargeForce {
    pub enabled: bool,
    pub strength: f64,
    /// Minimum distance over which the force acts. Clamps the singularity
    /// between near-coincident nodes.
    pub distance_min: f64,
    /// Maximum distance over which the force acts.
    pub distance_max: f64,
}

impl Default for ChargeForce {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: -300.0,
            distance_min: 1.0,
            distance_max: 2000.0,
        }
    }
}

/// Collision-avoidance force: nodes are treated as circles of `radius` that
/// push overlapping neighbours apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollideForce {
    pub enabled: bool,
    /// Overlap-resolution strength in `[0, 1]`.
    pub strength: f64,
    pub iterations: u32,
    pub radius: f64,
}

impl Default for CollideForce {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 0.7,
            iterations: 1,
            radius: 35.0,
        }
    }
}

/// Horizontal attraction toward the normalized `x` position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct XForce {
    pub enabled: bool,
    pub strength: f64,
    pub x: f64,
}

impl Default for XForce {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 1.0,
            x: 0.5,
        }
    }
}

/// Vertical attraction toward the normalized `y` position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YForce {
    pub enabled: bool,
    pub strength: f64,
    pub y: f64,
}

impl Default for YForce {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 1.0,
            y: 0.5,
        }
    }
}

/// Link force: pulls connected nodes toward a resting `distance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkForce {
    pub enabled: bool,
    pub distance: f64,
    pub iterations: u32,
}

impl Default for LinkForce {
    fn default() -> Self {
        Self {
            enabled: true,
            distance: 200.0,
            iterations: 1,
        }
    }
}

/// The full force-layout configuration handed to the layout engine at
/// startup.
///
/// `ForceConfig::default()` is the shipped default table: charge and link
/// forces on, collision and axis forces off, centering at the viewport
/// middle. Serialises with the engine's camelCase keys (`forceX`, `forceY`).
///
/// The struct is plain data. Consumers that let users retune forces at
/// runtime own their copy; nothing here is shared or mutated globally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForceConfig {
    pub center: CenterForce,
    pub charge: ChargeForce,
    pub collide: CollideForce,
    pub force_x: XForce,
    pub force_y: YForce,
    pub link: LinkForce,
}

// --- tests -------------------------------------------------------------------
