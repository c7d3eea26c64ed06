//! Human-readable text summaries of datasets and force configurations.
//!
//! The output is stable plain text for terminals and logs. It is not a
//! canonical format — only the JSON wire shape is; use serde when another
//! program is on the receiving end.

use crate::dataset::GraphData;
use crate::forces::ForceConfig;

/// Render a [`GraphData`] as a summary grouped by node class.
///
/// ```text
/// Graph  12 nodes, 14 links
/// ─────────────────────────
///
/// init (7)
///   [5] init.scope  group 1  →1 ←0
///   ...
///
/// mount (2)
///   [3] systemd  group 1  →1 ←8
///   ...
/// ```
///
/// Arrows give each node's outgoing/incoming link counts.
pub fn render_graph(graph: &GraphData) -> String {
    let header = format!(
        "Graph  {} node{}, {} link{}",
        graph.node_count(),
        plural(graph.node_count()),
        graph.link_count(),
        plural(graph.link_count()),
    );
    let rule = "─".repeat(header.chars().count());
    let mut out = format!("{}\n{}\n", header, rule);

    let mut classes: Vec<&str> = graph.nodes.iter().map(|n| n.class.as_str()).collect();
    classes.sort_unstable();
    classes.dedup();

    for class in classes {
        let indices = graph.by_class(class);
        out.push('\n');
        out.push_str(&format!("{} ({})\n", class, indices.len()));
        for i in indices {
            let node = &graph.nodes[i];
            out.push_str(&format!(
                "  [{}] {}  group {}  →{} ←{}\n",
                i,
                node.name,
                node.group,
                graph.outgoing(i).len(),
                graph.incoming(i).len(),
            ));
        }
    }

    out
}

/// Render a [`ForceConfig`] as one line per force block.
///
/// ```text
/// center   x 0.5  y 0.5
/// charge   on   strength -300  distance 1..2000
/// collide  off  strength 0.7  radius 35  iterations 1
/// forceX   off  strength 1  x 0.5
/// forceY   off  strength 1  y 0.5
/// link     on   distance 200  iterations 1
/// ```
pub fn render_forces(cfg: &ForceConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "center   x {}  y {}\n",
        cfg.center.x, cfg.center.y
    ));
    out.push_str(&format!(
        "charge   {}  strength {}  distance {}..{}\n",
        on_off(cfg.charge.enabled),
        cfg.charge.strength,
        cfg.charge.distance_min,
        cfg.charge.distance_max,
    ));
    out.push_str(&format!(
        "collide  {}  strength {}  radius {}  iterations {}\n",
        on_off(cfg.collide.enabled),
        cfg.collide.strength,
        cfg.collide.radius,
        cfg.collide.iterations,
    ));
    out.push_str(&format!(
        "forceX   {}  strength {}  x {}\n",
        on_off(cfg.force_x.enabled),
        cfg.force_x.strength,
        cfg.force_x.x,
    ));
    out.push_str(&format!(
        "forceY   {}  strength {}  y {}\n",
        on_off(cfg.force_y.enabled),
        cfg.force_y.strength,
        cfg.force_y.y,
    ));
    out.push_str(&format!(
        "link     {}  distance {}  iterations {}\n",
        on_off(cfg.link.enabled),
        cfg.link.distance,
        cfg.link.iterations,
    ));
    out
}

// --- helpers -----------------------------------------------------------------

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on "
    } else {
        "off"
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_summary_contains_counts_and_classes() {
        let rendered = render_graph(&GraphData::seed());
        assert!(rendered.contains("12 nodes, 14 links"));
        assert!(rendered.contains("system (3)"));
        assert!(rendered.contains("mount (2)"));
        assert!(rendered.contains("init (7)"));
        assert!(rendered.contains("[0] firmware"));
    }

    #[test]
    fn graph_summary_shows_degrees() {
        let rendered = render_graph(&GraphData::seed());
        // systemd: 1 outgoing, 8 incoming
        assert!(rendered.contains("[3] systemd  group 1  →1 ←8"));
    }

    #[test]
    fn forces_summary_one_line_per_block() {
        let rendered = render_forces(&ForceConfig::default());
        assert_eq!(rendered.lines().count(), 6);
        assert!(rendered.contains("charge   on   strength -300  distance 1..2000"));
        assert!(rendered.contains("collide  off"));
        assert!(rendered.contains("link     on   distance 200  iterations 1"));
    }
}
