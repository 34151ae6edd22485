use std::sync::Arc;

use crate::controller::AppState;
use crate::render::chart::{self, LineChart};
use crate::render::{network, Surface};
use crate::stats::Stats;
use crate::view;

/// Composes the drawing surface, the chart and the card list into one refresh
/// entry point. Before the first successful poll there is nothing to render;
/// after a failed poll the caller simply does not refresh, which keeps the
/// last good frame on the surface.
pub struct Dashboard<S, C> {
    pub surface: S,
    pub chart: C,
    stats: Arc<Stats>,
}

impl<S: Surface, C: LineChart> Dashboard<S, C> {
    pub fn new(surface: S, chart: C, stats: Arc<Stats>) -> Self {
        Self { surface, chart, stats }
    }

    /// Full UI refresh from the current state: network diagram, chart series,
    /// ranked cards, stats and market-info text.
    pub fn refresh(&mut self, state: &AppState) {
        let Some(snap) = &state.snapshot else {
            return;
        };

        network::draw(&mut self.surface, &snap.market, &snap.opportunities, state.viewport);
        chart::update(&mut self.chart, &state.history);
        self.stats.inc_redraw();

        let cards = view::build_cards(&snap.opportunities, state.sort);
        if cards.is_empty() {
            tracing::info!("{}", view::EMPTY_STATE_TEXT);
        }
        for card in &cards {
            tracing::info!(
                rank = card.rank,
                profit = %card.profit_label,
                tier = card.tier.label(),
                route = %card.route,
                steps = card.steps,
                product = %card.product_label,
                "opportunity"
            );
        }

        let panel = view::stats_panel(snap);
        let info = view::market_info(snap);
        tracing::info!(
            opportunities = %panel.total_opportunities,
            max_profit = %panel.max_profit,
            currencies = %panel.currencies,
            pairs = %panel.pairs,
            coverage = %info.coverage,
            avg_profit = %info.avg_profit,
            detection = %info.detection_time,
            last_update = %info.last_update,
            "market"
        );
    }

    /// Container resize: resync the surface first, then redraw, since node
    /// geometry depends on the surface dimensions.
    pub fn resize(&mut self, width: f64, height: f64, state: &AppState) {
        self.surface.resize(width, height);
        self.refresh(state);
    }
}
