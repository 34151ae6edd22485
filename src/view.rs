use crate::types::{Opportunity, Snapshot, SortMode};

pub const EMPTY_STATE_TEXT: &str = "No opportunities found (market efficient right now)";

/// Profit badge category for an opportunity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitTier {
    High,
    Medium,
    Low,
}

impl ProfitTier {
    pub fn classify(profit_percent: f64) -> Self {
        if profit_percent > 1.0 {
            ProfitTier::High
        } else if profit_percent > 0.5 {
            ProfitTier::Medium
        } else {
            ProfitTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfitTier::High => "high",
            ProfitTier::Medium => "medium",
            ProfitTier::Low => "low",
        }
    }
}

/// One rendered entry of the ranked opportunity list.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityCard {
    /// 1-based display rank.
    pub rank: usize,
    pub profit_label: String,
    pub tier: ProfitTier,
    pub route: String,
    pub steps: u32,
    pub product_label: String,
}

fn card(opp: &Opportunity, rank: usize) -> OpportunityCard {
    OpportunityCard {
        rank,
        profit_label: format!("{:+.4}%", opp.profit_percent),
        tier: ProfitTier::classify(opp.profit_percent),
        route: opp.path.join(" → "),
        steps: opp.path_length,
        product_label: format!("{:.6}", opp.product),
    }
}

/// Build the display list in the selected order. The feed is trusted to be
/// pre-sorted by profit, so `FeedOrder` passes it through untouched; the
/// other modes re-rank locally without mutating the snapshot.
pub fn build_cards(opportunities: &[Opportunity], sort: SortMode) -> Vec<OpportunityCard> {
    let mut order: Vec<&Opportunity> = opportunities.iter().collect();
    match sort {
        SortMode::FeedOrder => {}
        SortMode::ProfitDesc => {
            order.sort_by(|a, b| b.profit_percent.total_cmp(&a.profit_percent));
        }
        SortMode::PathLengthAsc => {
            order.sort_by_key(|o| o.path_length);
        }
    }
    order
        .into_iter()
        .enumerate()
        .map(|(i, opp)| card(opp, i + 1))
        .collect()
}

/// The four headline stat tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanel {
    pub total_opportunities: String,
    pub max_profit: String,
    pub currencies: String,
    pub pairs: String,
}

pub fn stats_panel(snap: &Snapshot) -> StatsPanel {
    StatsPanel {
        total_opportunities: snap.statistics.total_found.to_string(),
        max_profit: format!("{:.4}%", snap.statistics.max_profit),
        currencies: snap.market.currencies.to_string(),
        pairs: snap.market.pairs.to_string(),
    }
}

/// Secondary market-info panel under the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketInfo {
    pub last_update: String,
    pub detection_time: String,
    pub coverage: String,
    pub avg_profit: String,
    pub currency_tags: Vec<String>,
}

pub fn market_info(snap: &Snapshot) -> MarketInfo {
    MarketInfo {
        last_update: snap.timestamp.format("%H:%M:%S").to_string(),
        detection_time: format!("{:.2} ms", snap.detection_time_seconds * 1000.0),
        coverage: format!("{:.1}%", snap.market.coverage_percent),
        avg_profit: format!("{:.4}%", snap.statistics.avg_profit),
        currency_tags: snap.market.all_currencies.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Market, Statistics};
    use chrono::NaiveDate;

    fn opp(path: &[&str], profit: f64) -> Opportunity {
        Opportunity {
            path: path.iter().map(|s| s.to_string()).collect(),
            path_length: path.len() as u32,
            profit_percent: profit,
            product: 1.0 + profit / 100.0,
        }
    }

    fn snap(opps: Vec<Opportunity>) -> Snapshot {
        Snapshot {
            timestamp: NaiveDate::from_ymd_opt(2026, 8, 30)
                .unwrap()
                .and_hms_opt(14, 5, 9)
                .unwrap(),
            detection_time_seconds: 0.0042,
            market: Market {
                currencies: 2,
                pairs: 2,
                coverage_percent: 100.0,
                all_currencies: vec!["USD".into(), "EUR".into()],
            },
            statistics: Statistics {
                total_found: opps.len() as u64,
                max_profit: 1.25,
                avg_profit: 1.25,
            },
            opportunities: opps,
        }
    }

    #[test]
    fn tier_boundaries_are_strict() {
        assert_eq!(ProfitTier::classify(1.01), ProfitTier::High);
        assert_eq!(ProfitTier::classify(1.0), ProfitTier::Medium);
        assert_eq!(ProfitTier::classify(0.51), ProfitTier::Medium);
        assert_eq!(ProfitTier::classify(0.5), ProfitTier::Low);
        assert_eq!(ProfitTier::classify(-0.3), ProfitTier::Low);
    }

    #[test]
    fn card_formats_match_display_contract() {
        let cards = build_cards(&[opp(&["USD", "EUR", "USD"], 1.25)], SortMode::FeedOrder);
        assert_eq!(cards.len(), 1);
        let c = &cards[0];
        assert_eq!(c.rank, 1);
        assert_eq!(c.profit_label, "+1.2500%");
        assert_eq!(c.tier, ProfitTier::High);
        assert_eq!(c.route, "USD → EUR → USD");
        assert_eq!(c.steps, 3);
        assert_eq!(c.product_label, "1.012500");
    }

    #[test]
    fn negative_profit_keeps_its_sign() {
        let cards = build_cards(&[opp(&["USD", "EUR"], -0.5)], SortMode::FeedOrder);
        assert_eq!(cards[0].profit_label, "-0.5000%");
        assert_eq!(cards[0].tier, ProfitTier::Low);
    }

    #[test]
    fn feed_order_is_passed_through() {
        let opps = vec![opp(&["A", "B"], 0.1), opp(&["C", "D"], 2.0)];
        let cards = build_cards(&opps, SortMode::FeedOrder);
        assert_eq!(cards[0].route, "A → B");
        assert_eq!(cards[1].route, "C → D");
    }

    #[test]
    fn profit_desc_reranks_locally() {
        let opps = vec![opp(&["A", "B"], 0.1), opp(&["C", "D"], 2.0)];
        let cards = build_cards(&opps, SortMode::ProfitDesc);
        assert_eq!(cards[0].route, "C → D");
        assert_eq!(cards[0].rank, 1);
        assert_eq!(cards[1].route, "A → B");
        assert_eq!(cards[1].rank, 2);
    }

    #[test]
    fn path_length_asc_is_stable_for_ties() {
        let opps = vec![
            opp(&["A", "B", "C", "A"], 0.9),
            opp(&["D", "E"], 0.1),
            opp(&["F", "G"], 0.2),
        ];
        let cards = build_cards(&opps, SortMode::PathLengthAsc);
        assert_eq!(cards[0].route, "D → E");
        assert_eq!(cards[1].route, "F → G");
        assert_eq!(cards[2].route, "A → B → C → A");
    }

    #[test]
    fn panels_format_market_numbers() {
        let s = snap(vec![opp(&["USD", "EUR", "USD"], 1.25)]);
        let stats = stats_panel(&s);
        assert_eq!(stats.total_opportunities, "1");
        assert_eq!(stats.max_profit, "1.2500%");
        assert_eq!(stats.currencies, "2");
        assert_eq!(stats.pairs, "2");

        let info = market_info(&s);
        assert_eq!(info.last_update, "14:05:09");
        assert_eq!(info.detection_time, "4.20 ms");
        assert_eq!(info.coverage, "100.0%");
        assert_eq!(info.avg_profit, "1.2500%");
        assert_eq!(info.currency_tags, vec!["USD", "EUR"]);
    }
}
