use serde::Deserialize;

fn default_snapshot_url() -> String {
    "http://127.0.0.1:8000/data/arbitrage_results.json".to_string()
}

fn default_history_url() -> String {
    "http://127.0.0.1:8000/data/history.json".to_string()
}

fn default_poll_ms() -> u64 {
    5000
}

fn default_surface_width() -> f64 {
    800.0
}

fn default_surface_height() -> f64 {
    600.0
}

fn default_stats_log_sec() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_snapshot_url")]
    pub snapshot_url: String,
    #[serde(default = "default_history_url")]
    pub history_url: String,
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,

    // Drawing surface dimensions (stand-in for the container size).
    #[serde(default = "default_surface_width")]
    pub surface_width: f64,
    #[serde(default = "default_surface_height")]
    pub surface_height: f64,

    // Stats
    #[serde(default = "default_stats_log_sec")]
    pub stats_log_sec: u64,
    #[serde(default)]
    pub stats_jsonl_path: Option<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let c = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;
        Ok(c.try_deserialize()?)
    }
}
