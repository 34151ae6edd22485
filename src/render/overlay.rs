use std::collections::HashMap;
use std::f64::consts::PI;

use crate::render::geometry::{Node, Point};
use crate::render::Surface;
use crate::types::Opportunity;

/// More than three overlaid paths is unreadable on a shared canvas.
pub const MAX_RENDERED_PATHS: usize = 3;

const EDGE_COLOR: &str = "#f59e0b";
const EDGE_WIDTH: f64 = 3.0;
const HEAD_WIDTH: f64 = 2.0;
const HEAD_LENGTH: f64 = 10.0;
const HEAD_ANGLE: f64 = PI / 6.0;

/// Overlay transparency by 0-based rank: 1.0, 0.7, 0.4.
pub fn opacity(rank: usize) -> f64 {
    (1.0 - rank as f64 * 0.3).max(0.0)
}

/// Draw the top-ranked opportunity paths as directed edges between already
/// placed nodes. An edge whose endpoint currency is missing from the node map
/// is skipped silently; that is the defined behavior for a path referencing a
/// currency outside `all_currencies`.
pub fn draw_paths(
    surface: &mut dyn Surface,
    nodes: &HashMap<String, Node>,
    opportunities: &[Opportunity],
) {
    for (rank, opp) in opportunities.iter().take(MAX_RENDERED_PATHS).enumerate() {
        let alpha = opacity(rank);
        for pair in opp.path.windows(2) {
            let (from, to) = match (nodes.get(&pair[0]), nodes.get(&pair[1])) {
                (Some(f), Some(t)) => (f.at, t.at),
                _ => continue,
            };
            surface.stroke_line(from, to, EDGE_COLOR, EDGE_WIDTH, alpha);
            draw_arrow_head(surface, from, to, alpha);
        }
    }
}

/// Two segments of fixed length at ±30° off the reversed edge direction,
/// anchored at the destination. Deterministic construction: identical inputs
/// must reproduce identical arrow geometry.
fn draw_arrow_head(surface: &mut dyn Surface, from: Point, to: Point, alpha: f64) {
    let angle = (to.y - from.y).atan2(to.x - from.x);

    let left = Point {
        x: to.x - HEAD_LENGTH * (angle - HEAD_ANGLE).cos(),
        y: to.y - HEAD_LENGTH * (angle - HEAD_ANGLE).sin(),
    };
    let right = Point {
        x: to.x - HEAD_LENGTH * (angle + HEAD_ANGLE).cos(),
        y: to.y - HEAD_LENGTH * (angle + HEAD_ANGLE).sin(),
    };

    surface.stroke_line(left, to, EDGE_COLOR, HEAD_WIDTH, alpha);
    surface.stroke_line(right, to, EDGE_COLOR, HEAD_WIDTH, alpha);
}
