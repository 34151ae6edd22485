use std::sync::Arc;

use crate::feed::ArbitrageFeed;
use crate::stats::Stats;
use crate::types::{Connectivity, HistorySample, Snapshot, SortMode, Viewport};

/// Explicit application state, passed to rendering instead of living as
/// ambient globals. Snapshot and history are replaced wholesale by successful
/// polls; viewport and sort mode belong to the user and survive every poll.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub snapshot: Option<Snapshot>,
    pub history: Vec<HistorySample>,
    /// None until the first poll completes.
    pub connectivity: Option<Connectivity>,
    pub viewport: Viewport,
    pub sort: SortMode,
}

/// Poll/refresh state machine. Each poll fetches both resources, classifies
/// the outcome, and applies the result atomically: either the whole snapshot
/// lands or nothing does. Overlapping polls (timer + manual refresh) follow
/// last-write-wins, which is safe because every poll is a read-only,
/// idempotent replacement with fresher-or-equal data.
pub struct Controller<F> {
    feed: F,
    stats: Arc<Stats>,
    pub state: AppState,
}

impl<F: ArbitrageFeed> Controller<F> {
    pub fn new(feed: F, stats: Arc<Stats>) -> Self {
        Self { feed, stats, state: AppState::default() }
    }

    /// Run one poll sequence. Used for both the recurring timer tick and a
    /// manual refresh; the two do not interfere.
    pub async fn poll(&mut self) -> Connectivity {
        self.stats.inc_poll();

        let (snapshot, history) =
            futures::join!(self.feed.fetch_snapshot(), self.feed.fetch_history());

        match snapshot {
            Ok(snap) => {
                let history = match history {
                    Ok(h) => Some(h),
                    Err(err) => {
                        // Soft failure: keep the previous series.
                        self.stats.inc_history_miss();
                        tracing::debug!(error = %err, "history fetch failed, keeping previous series");
                        None
                    }
                };
                self.stats.add_opportunities(snap.opportunities.len() as u64);
                self.apply(snap, history);
                Connectivity::Online
            }
            Err(err) => {
                self.stats.inc_poll_failed();
                tracing::warn!(error = %err, "snapshot fetch failed, keeping last good data");
                self.state.connectivity = Some(Connectivity::Offline);
                Connectivity::Offline
            }
        }
    }

    fn apply(&mut self, snapshot: Snapshot, history: Option<Vec<HistorySample>>) {
        self.state.snapshot = Some(snapshot);
        if let Some(h) = history {
            self.state.history = h;
        }
        self.state.connectivity = Some(Connectivity::Online);
    }

    pub fn zoom_in(&mut self) {
        self.state.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.state.viewport.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.state.viewport.reset();
    }

    pub fn cycle_sort(&mut self) {
        self.state.sort = self.state.sort.next();
        tracing::info!(sort = self.state.sort.label(), "sort mode changed");
    }
}
