use crate::render::geometry::{layout_nodes, Point};
use crate::render::{overlay, Surface};
use crate::types::{Market, Opportunity, Viewport};

const NODE_RADIUS: f64 = 25.0;
const NODE_OUTLINE_WIDTH: f64 = 2.0;

const CRYPTO_COLOR: &str = "#6366f1";
const FIAT_COLOR: &str = "#10b981";
const OUTLINE_COLOR: &str = "#ffffff";
const LABEL_COLOR: &str = "#ffffff";
const PLACEHOLDER_COLOR: &str = "#64748b";

pub const PLACEHOLDER_TEXT: &str = "Waiting for data...";

/// Full redraw of the currency network: clear, top-3 path overlays, then all
/// nodes on top so edges never occlude them. Idempotent for identical inputs;
/// callers may trigger it from polls, viewport actions and resizes without
/// coordination.
pub fn draw(
    surface: &mut dyn Surface,
    market: &Market,
    opportunities: &[Opportunity],
    view: Viewport,
) {
    surface.clear();
    let (width, height) = surface.size();

    if market.all_currencies.is_empty() {
        let center = Point { x: width / 2.0, y: height / 2.0 };
        surface.fill_text(PLACEHOLDER_TEXT, center, PLACEHOLDER_COLOR);
        return;
    }

    let nodes = layout_nodes(&market.all_currencies, width, height, view);

    overlay::draw_paths(surface, &nodes, opportunities);

    // Draw in placement order, looked up by code, so the iteration order of
    // the map never affects output.
    for code in &market.all_currencies {
        let node = nodes[code.as_str()];
        let color = if node.is_fiat { FIAT_COLOR } else { CRYPTO_COLOR };
        surface.fill_circle(node.at, NODE_RADIUS, color);
        surface.stroke_circle(node.at, NODE_RADIUS, OUTLINE_COLOR, NODE_OUTLINE_WIDTH);
        surface.fill_text(code, node.at, LABEL_COLOR);
    }

    tracing::debug!(
        nodes = market.all_currencies.len(),
        paths = opportunities.len().min(overlay::MAX_RENDERED_PATHS),
        zoom = view.zoom,
        "network redraw"
    );
}
