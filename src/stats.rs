use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct Stats {
    start_ms: AtomicU64,
    last_log_ms: AtomicU64,

    polls: AtomicU64,
    polls_failed: AtomicU64,
    history_misses: AtomicU64,

    redraws: AtomicU64,
    opportunities_seen: AtomicU64,
}

impl Stats {
    pub fn new(now_ms: u64) -> Arc<Self> {
        let s = Arc::new(Self::default());
        s.start_ms.store(now_ms, Ordering::Relaxed);
        s.last_log_ms.store(now_ms, Ordering::Relaxed);
        s
    }

    pub fn inc_poll(&self) {
        self.polls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_poll_failed(&self) {
        self.polls_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_history_miss(&self) {
        self.history_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_redraw(&self) {
        self.redraws.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_opportunities(&self, n: u64) {
        self.opportunities_seen.fetch_add(n, Ordering::Relaxed);
    }

    pub fn should_log(&self, now_ms: u64, every_sec: u64) -> bool {
        if every_sec == 0 { return false; }
        let last = self.last_log_ms.load(Ordering::Relaxed);
        now_ms.saturating_sub(last) >= every_sec.saturating_mul(1000)
    }

    pub fn mark_logged(&self, now_ms: u64) {
        self.last_log_ms.store(now_ms, Ordering::Relaxed);
    }

    pub fn snapshot(&self, now_ms: u64) -> StatsSnapshot {
        let start = self.start_ms.load(Ordering::Relaxed);
        StatsSnapshot {
            now_ms,
            up_sec: (now_ms.saturating_sub(start)) / 1000,
            polls: self.polls.load(Ordering::Relaxed),
            polls_failed: self.polls_failed.load(Ordering::Relaxed),
            history_misses: self.history_misses.load(Ordering::Relaxed),
            redraws: self.redraws.load(Ordering::Relaxed),
            opportunities_seen: self.opportunities_seen.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub now_ms: u64,
    pub up_sec: u64,
    pub polls: u64,
    pub polls_failed: u64,
    pub history_misses: u64,
    pub redraws: u64,
    pub opportunities_seen: u64,
}
