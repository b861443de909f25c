use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeframeStats {
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    #[serde(default, deserialize_with = "drop_null_timeframes")]
    pub timeframes: BTreeMap<String, TimeframeStats>,
}

// `null` entries (or a `null` map) count as missing data for that timeframe.
fn drop_null_timeframes<'de, D>(deserializer: D) -> Result<BTreeMap<String, TimeframeStats>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<BTreeMap<String, Option<TimeframeStats>>>::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, stats)| stats.map(|stats| (key, stats)))
        .collect())
}

impl Activity {
    pub fn stats(&self, timeframe: &str) -> Option<&TimeframeStats> {
        self.timeframes.get(timeframe)
    }
}

pub type Dataset = Vec<Activity>;

/// One rendered activity for a single timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub style_key: String,
    pub hours: String,
    pub previous: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TimeframeRequest {
    pub timeframe: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ViewResponse {
    pub timeframe: String,
    pub status: ViewStatus,
    pub changed: bool,
    pub loaded_at: Option<String>,
    pub grid: String,
    pub cards: Vec<Card>,
}
