use chrono::NaiveDateTime;
use serde::Deserialize;

/// One complete poll result from the feed. Replaced wholesale on every
/// successful poll; never merged incrementally.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub timestamp: NaiveDateTime,
    pub detection_time_seconds: f64,
    pub market: Market,
    pub statistics: Statistics,
    pub opportunities: Vec<Opportunity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    pub currencies: u32,
    pub pairs: u32,
    pub coverage_percent: f64,
    /// Order defines node placement around the circle; the producer keeps it
    /// stable across polls so the layout does not jitter.
    #[serde(default)]
    pub all_currencies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Statistics {
    pub total_found: u64,
    pub max_profit: f64,
    pub avg_profit: f64,
}

/// A detected arbitrage cycle. `profit_percent` may be zero or negative;
/// nothing downstream assumes positivity.
#[derive(Debug, Clone, Deserialize)]
pub struct Opportunity {
    pub path: Vec<String>,
    pub path_length: u32,
    pub profit_percent: f64,
    pub product: f64,
}

/// One poll's opportunity count. The producer emits extra fields (e.g.
/// `top_profit`); they are ignored on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySample {
    pub timestamp: NaiveDateTime,
    pub count: u64,
}

/// Derived purely from the latest fetch outcome; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl Connectivity {
    pub fn label(self) -> &'static str {
        match self {
            Connectivity::Online => "online",
            Connectivity::Offline => "offline",
        }
    }
}

pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 10.0;
pub const ZOOM_IN_STEP: f64 = 1.2;
pub const ZOOM_OUT_STEP: f64 = 0.8;

/// Zoom/pan applied uniformly to all node positions. Survives polls; mutated
/// only by explicit user actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl Viewport {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_IN_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom * ZOOM_OUT_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Display ordering for the opportunity list. The feed arrives pre-sorted by
/// profit, so `FeedOrder` is the default and usually equivalent to
/// `ProfitDesc`; the sort action cycles through the modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    FeedOrder,
    ProfitDesc,
    PathLengthAsc,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::FeedOrder => SortMode::ProfitDesc,
            SortMode::ProfitDesc => SortMode::PathLengthAsc,
            SortMode::PathLengthAsc => SortMode::FeedOrder,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::FeedOrder => "feed",
            SortMode::ProfitDesc => "profit_desc",
            SortMode::PathLengthAsc => "path_len_asc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_reset_restores_defaults() {
        let mut v = Viewport { zoom: 3.7, pan_x: 40.0, pan_y: -12.5 };
        v.reset();
        assert_eq!(v, Viewport::default());
        assert_eq!(v.zoom, 1.0);
        assert_eq!((v.pan_x, v.pan_y), (0.0, 0.0));
    }

    #[test]
    fn zoom_is_clamped_to_sane_range() {
        let mut v = Viewport::default();
        for _ in 0..100 {
            v.zoom_in();
        }
        assert_eq!(v.zoom, ZOOM_MAX);
        for _ in 0..100 {
            v.zoom_out();
        }
        assert_eq!(v.zoom, ZOOM_MIN);
    }

    #[test]
    fn sort_mode_cycles_back_to_feed_order() {
        let m = SortMode::default();
        assert_eq!(m, SortMode::FeedOrder);
        assert_eq!(m.next().next().next(), SortMode::FeedOrder);
    }

    #[test]
    fn snapshot_decodes_producer_json() {
        let body = r#"{
            "timestamp": "2026-08-30T14:05:09.123456",
            "detection_time_seconds": 0.0042,
            "market": {
                "currencies": 2,
                "pairs": 2,
                "coverage_percent": 100.0,
                "all_currencies": ["USD", "EUR"]
            },
            "statistics": {"total_found": 1, "max_profit": 1.25, "avg_profit": 1.25},
            "opportunities": [
                {"path": ["USD", "EUR", "USD"], "path_length": 3,
                 "profit_percent": 1.25, "product": 1.0125}
            ]
        }"#;
        let snap: Snapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snap.market.all_currencies, vec!["USD", "EUR"]);
        assert_eq!(snap.opportunities.len(), 1);
        assert_eq!(snap.opportunities[0].path_length, 3);
        assert_eq!(snap.timestamp.format("%H:%M").to_string(), "14:05");
    }

    #[test]
    fn history_sample_ignores_extra_producer_fields() {
        let body = r#"[{"timestamp": "2026-08-30T14:05:09", "count": 3, "top_profit": 1.9}]"#;
        let hist: Vec<HistorySample> = serde_json::from_str(body).unwrap();
        assert_eq!(hist[0].count, 3);
    }
}
