mod config;
mod controller;
mod dashboard;
mod feed;
mod render;
mod stats;
mod types;
mod view;

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::controller::Controller;
use crate::dashboard::Dashboard;
use crate::feed::{ArbitrageFeed, HttpFeed};
use crate::render::chart::BufferedChart;
use crate::render::RecordingSurface;
use crate::stats::Stats;
use crate::types::Connectivity;

type Dash = Dashboard<RecordingSurface, BufferedChart>;

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

async fn maybe_write_jsonl(path: &Option<String>, line: &str) {
    if let Some(p) = path.as_ref().map(|x| x.trim().to_string()).filter(|x| !x.is_empty()) {
        if let Ok(mut f) = tokio::fs::OpenOptions::new().create(true).append(true).open(&p).await {
            use tokio::io::AsyncWriteExt;
            let _ = f.write_all(line.as_bytes()).await;
            let _ = f.write_all(b"\n").await;
        }
    }
}

async fn poll_and_refresh<F: ArbitrageFeed>(ctl: &mut Controller<F>, dash: &mut Dash) {
    let connectivity = ctl.poll().await;
    if connectivity == Connectivity::Online {
        dash.refresh(&ctl.state);
    }
    tracing::info!(
        status = ctl.state.connectivity.map(Connectivity::label).unwrap_or("unknown"),
        opportunities = ctl
            .state
            .snapshot
            .as_ref()
            .map(|snap| snap.opportunities.len())
            .unwrap_or(0),
        nodes = dash.surface.circles().count(),
        lines = dash.surface.lines().count(),
        labels = dash.surface.texts().count(),
        "heartbeat: poll completed"
    );
}

/// Interactive actions read from stdin: refresh, sort, zoom-in, zoom-out,
/// reset. A manual refresh runs the same poll sequence immediately and leaves
/// the recurring timer alone.
async fn handle_command<F: ArbitrageFeed>(cmd: &str, ctl: &mut Controller<F>, dash: &mut Dash) {
    match cmd {
        "refresh" => poll_and_refresh(ctl, dash).await,
        "sort" => {
            ctl.cycle_sort();
            dash.refresh(&ctl.state);
        }
        "zoom-in" => {
            ctl.zoom_in();
            dash.refresh(&ctl.state);
        }
        "zoom-out" => {
            ctl.zoom_out();
            dash.refresh(&ctl.state);
        }
        "reset" => {
            ctl.reset_view();
            dash.refresh(&ctl.state);
        }
        "" => {}
        other => match parse_resize(other) {
            Some((w, h)) => dash.resize(w, h, &ctl.state),
            None => tracing::warn!(command = other, "unknown command"),
        },
    }
}

/// `resize <width> <height>` with positive finite dimensions.
fn parse_resize(cmd: &str) -> Option<(f64, f64)> {
    let rest = cmd.strip_prefix("resize")?;
    let mut parts = rest.split_whitespace();
    let w: f64 = parts.next()?.parse().ok()?;
    let h: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
        return None;
    }
    Some((w, h))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let s = Settings::from_env()?;
    let stats = Stats::new(now_ms());

    let feed = HttpFeed::new(s.snapshot_url.clone(), s.history_url.clone());
    let mut ctl = Controller::new(feed, stats.clone());
    let mut dash = Dashboard::new(
        RecordingSurface::new(s.surface_width, s.surface_height),
        BufferedChart::default(),
        stats.clone(),
    );

    tracing::info!(
        snapshot_url = %s.snapshot_url,
        history_url = %s.history_url,
        poll_ms = s.poll_ms,
        "dashboard started"
    );

    // Immediate first poll, then a fixed interval measured from the end of
    // each poll. Failed polls leave the last good frame rendered; the status
    // field is the only user-visible signal.
    poll_and_refresh(&mut ctl, &mut dash).await;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let poll_interval = std::time::Duration::from_millis(s.poll_ms);
    let timer = tokio::time::sleep(poll_interval);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            _ = &mut timer => {
                poll_and_refresh(&mut ctl, &mut dash).await;
                timer.as_mut().reset(tokio::time::Instant::now() + poll_interval);
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(cmd)) => handle_command(cmd.trim(), &mut ctl, &mut dash).await,
                    _ => stdin_open = false,
                }
            }
        }

        // stats summary
        let t = now_ms();
        if stats.should_log(t, s.stats_log_sec) {
            let ss = stats.snapshot(t);
            stats.mark_logged(t);

            let line = serde_json::to_string(&ss).unwrap_or_default();
            tracing::info!(
                up_sec = ss.up_sec,
                polls = ss.polls,
                polls_failed = ss.polls_failed,
                history_misses = ss.history_misses,
                redraws = ss.redraws,
                opportunities_seen = ss.opportunities_seen,
                "stats"
            );

            maybe_write_jsonl(&s.stats_jsonl_path, &line).await;
        }
    }
}
