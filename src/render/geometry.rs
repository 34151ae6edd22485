use std::collections::HashMap;
use std::f64::consts::PI;

use crate::types::Viewport;

/// Traditional fiat codes; everything else is treated as crypto. Only picks
/// the node's display color, never feeds into layout or ranking.
pub const FIAT_REFERENCE: [&str; 7] = ["USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF"];

/// Fraction of the shorter surface edge used as the layout circle radius.
const RADIUS_FRACTION: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub at: Point,
    pub is_fiat: bool,
}

pub fn is_fiat(code: &str) -> bool {
    FIAT_REFERENCE.contains(&code)
}

/// Place the currencies evenly on a circle, first node at 12 o'clock,
/// proceeding clockwise, with the viewport transform applied. Pure function
/// of its inputs; an empty currency list yields an empty map and the caller
/// renders a placeholder instead.
pub fn layout_nodes(
    currencies: &[String],
    width: f64,
    height: f64,
    view: Viewport,
) -> HashMap<String, Node> {
    let mut nodes = HashMap::with_capacity(currencies.len());
    if currencies.is_empty() {
        return nodes;
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) * RADIUS_FRACTION;
    let n = currencies.len() as f64;

    for (i, code) in currencies.iter().enumerate() {
        let angle = (i as f64 / n) * PI * 2.0 - PI / 2.0;
        nodes.insert(
            code.clone(),
            Node {
                at: Point {
                    x: center_x + angle.cos() * radius * view.zoom + view.pan_x,
                    y: center_y + angle.sin() * radius * view.zoom + view.pan_y,
                },
                is_fiat: is_fiat(code),
            },
        );
    }

    nodes
}
